/// Centralized error types for resume-extract using thiserror
///
/// Extraction itself is infallible: a missing field is `None` and a document
/// without chunks is reported through `Extraction::is_empty_result`. The errors
/// below only come from configuration handling and the CLI's input plumbing.
use thiserror::Error;

/// Main error type for the extraction engine
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {0}")]
    LoadFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
}

/// Errors raised when the caller hands over unusable text
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Text required")]
    Empty,

    #[error("Text too short: {len} characters, need at least {min}")]
    TooShort { len: usize, min: usize },
}

impl From<anyhow::Error> for ExtractError {
    fn from(err: anyhow::Error) -> Self {
        ExtractError::Other(format!("{:#}", err))
    }
}

impl ExtractError {
    /// Convert to a user-facing error string suitable for CLI output
    pub fn to_user_string(&self) -> String {
        match self {
            // Every input error keeps the `{"error": "Text required"}` contract
            ExtractError::Input(_) => "Text required".to_string(),
            other => other.to_string(),
        }
    }

    /// Check if this is a user error (bad input or config) vs system error
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ExtractError::Input(_)
                | ExtractError::Config(ConfigError::InvalidValue { .. })
                | ExtractError::Config(ConfigError::ParseFailed(_))
        )
    }
}
