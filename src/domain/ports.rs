use crate::domain::model::{OutputFormat, ValidationMode};

pub trait Area {
    fn area(&self) -> f64;
}

pub trait ConfigProvider: Send + Sync {
    fn validation_mode(&self) -> ValidationMode;
    fn precision(&self) -> Option<usize>;
    fn output_format(&self) -> OutputFormat;
}
