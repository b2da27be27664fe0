use serde::{Deserialize, Serialize};

/// Width and height of a rectangle. Consumed by reference, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleDimensions {
    pub width: f64,
    pub height: f64,
}

impl RectangleDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One row of batch output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaRecord {
    pub width: f64,
    pub height: f64,
    pub area: f64,
}

impl AreaRecord {
    pub fn new(dimensions: &RectangleDimensions, area: f64) -> Self {
        Self {
            width: dimensions.width,
            height: dimensions.height,
            area,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Reject negative and non-finite dimensions.
    #[default]
    Strict,
    /// Plain arithmetic, whatever the inputs.
    Unchecked,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}
