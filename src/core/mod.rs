pub mod batch;
pub mod calculator;

pub use crate::domain::model::{AreaRecord, OutputFormat, RectangleDimensions, ValidationMode};
pub use crate::domain::ports::{Area, ConfigProvider};
pub use crate::utils::error::Result;
