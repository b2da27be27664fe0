use thiserror::Error;

#[derive(Error, Debug)]
pub enum AreaError {
    #[error("Invalid dimension '{field}' = {value}: {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("Unsupported file format for '{path}'. Supported extensions: json, csv")]
    UnsupportedFormat { path: String },

    #[error("JSON output cannot represent the non-finite value {value} in '{field}'")]
    NonFiniteOutput { field: String, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AreaError {
    /// Prefixes the field of a per-record error with the batch record index.
    pub fn at_record(self, index: usize) -> Self {
        match self {
            AreaError::InvalidDimension {
                field,
                value,
                reason,
            } => AreaError::InvalidDimension {
                field: format!("records[{}].{}", index, field),
                value,
                reason,
            },
            AreaError::NonFiniteOutput { field, value } => AreaError::NonFiniteOutput {
                field: format!("records[{}].{}", index, field),
                value,
            },
            other => other,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AreaError::InvalidDimension { field, value, .. } => {
                format!("The {} value {} cannot be used to compute an area", field, value)
            }
            AreaError::InvalidConfigValue { field, .. } | AreaError::MissingConfig { field } => {
                format!("The configuration option '{}' is not usable", field)
            }
            AreaError::ConfigParse { .. } => "The configuration file could not be parsed".to_string(),
            AreaError::UnsupportedFormat { path } => format!("Cannot read '{}'", path),
            AreaError::NonFiniteOutput { field, .. } => {
                format!("The result {} cannot be written as JSON", field)
            }
            AreaError::Io(_) => "A file could not be read or written".to_string(),
            AreaError::Csv(_) | AreaError::Json(_) => "The input data is malformed".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AreaError::InvalidDimension { .. } => {
                "Use finite, non-negative dimensions, or pass --mode unchecked to skip validation"
            }
            AreaError::InvalidConfigValue { .. } => "Check the value against the documented range",
            AreaError::MissingConfig { .. } => {
                "Pass both --width and --height, or an --input file"
            }
            AreaError::ConfigParse { .. } => "Make sure the file is valid TOML",
            AreaError::UnsupportedFormat { .. } => "Rename the file to use a .json or .csv extension",
            AreaError::NonFiniteOutput { .. } => "Use --format csv or --format text for non-finite results",
            AreaError::Io(_) => "Check that the path exists and is accessible",
            AreaError::Csv(_) => "The CSV input needs a header row with width and height columns",
            AreaError::Json(_) => "The JSON input must be an object or an array of objects with width and height",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            AreaError::InvalidDimension { .. }
            | AreaError::NonFiniteOutput { .. }
            | AreaError::Csv(_)
            | AreaError::Json(_) => 1,
            AreaError::InvalidConfigValue { .. }
            | AreaError::MissingConfig { .. }
            | AreaError::ConfigParse { .. }
            | AreaError::UnsupportedFormat { .. } => 2,
            AreaError::Io(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AreaError>;
