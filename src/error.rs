//! Error types for the Nikolaus Tours site

use thiserror::Error;

/// Main application error type
///
/// Field validation problems are outcomes of a submit action and never
/// surface as errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing locale file for: {0}")]
    MissingLocale(String),

    #[error("Failed to load {path}: {reason}")]
    Fetch { path: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn fetch(path: impl Into<String>, reason: impl ToString) -> Self {
        AppError::Fetch {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
