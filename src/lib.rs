pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{toml_config::TomlConfig, CliConfig, DimensionSource};
pub use crate::core::calculator::{calculate_area, try_calculate_area, AreaCalculator};
pub use crate::domain::model::{AreaRecord, OutputFormat, RectangleDimensions, ValidationMode};
pub use crate::domain::ports::{Area, ConfigProvider};
pub use crate::utils::error::{AreaError, Result};
