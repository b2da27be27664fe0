// Domain layer: the rectangle model and the traits the rest of the crate is written against.

pub mod model;
pub mod ports;
