pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat, RectangleDimensions, ValidationMode};
use crate::utils::error::{AreaError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_range, validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};
use toml_config::{TomlConfig, MAX_PRECISION};

#[cfg(feature = "cli")]
use clap::Parser;

/// Where the dimensions to compute come from.
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionSource {
    Inline(RectangleDimensions),
    File(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "calculate-area"))]
#[cfg_attr(feature = "cli", command(about = "Compute rectangle areas from dimensions"))]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, allow_hyphen_values = true))]
    pub width: Option<f64>,

    #[cfg_attr(feature = "cli", arg(long, allow_hyphen_values = true))]
    pub height: Option<f64>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "JSON or CSV file of dimensions"))]
    pub input: Option<String>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Write results here instead of stdout"))]
    pub output: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, value_enum))]
    pub format: Option<OutputFormat>,

    #[cfg_attr(feature = "cli", arg(long, value_enum))]
    pub mode: Option<ValidationMode>,

    #[cfg_attr(feature = "cli", arg(long, help = "Decimal places in the output"))]
    pub precision: Option<usize>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Path to TOML configuration file"))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    /// Fills options not given on the command line from the config file.
    pub fn apply_file_defaults(&mut self, file: &TomlConfig) {
        if self.mode.is_none() {
            self.mode = file.calculator.mode;
        }
        if self.precision.is_none() {
            self.precision = file.calculator.precision;
        }
        if self.format.is_none() {
            self.format = file.output.format;
        }
        if self.output.is_none() {
            self.output = file.output.path.clone();
        }
    }

    pub fn dimension_source(&self) -> Result<DimensionSource> {
        match (&self.input, self.width, self.height) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(AreaError::InvalidConfigValue {
                field: "input".to_string(),
                value: self.input.clone().unwrap_or_default(),
                reason: "Use either --input or --width/--height, not both".to_string(),
            }),
            (Some(path), None, None) => Ok(DimensionSource::File(path.clone())),
            (None, width, height) => {
                if width.is_none() && height.is_none() {
                    return Err(AreaError::MissingConfig {
                        field: "width/height or input".to_string(),
                    });
                }
                let width = *validate_required_field("width", &self.width)?;
                let height = *validate_required_field("height", &self.height)?;
                Ok(DimensionSource::Inline(RectangleDimensions::new(width, height)))
            }
        }
    }
}

impl ConfigProvider for CliConfig {
    fn validation_mode(&self) -> ValidationMode {
        self.mode.unwrap_or_default()
    }

    fn precision(&self) -> Option<usize> {
        self.precision
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let DimensionSource::File(path) = self.dimension_source()? {
            validate_path("input", &path)?;
            validate_file_extension("input", &path, &["json", "csv"])?;
        }

        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }

        if let Some(precision) = self.precision {
            validate_range("precision", precision, 0, MAX_PRECISION)?;
        }

        Ok(())
    }
}
