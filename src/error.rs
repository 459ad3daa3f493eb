//! Error types for the Sentilex analysis core
//!
//! This module provides structured error handling using thiserror for
//! error definitions and anyhow for error propagation at the caller.

use thiserror::Error;

/// Main error type for Sentilex operations
#[derive(Error, Debug)]
pub enum SentilexError {
    /// I/O error (dictionary files, persisted word store)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse or serialize error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Dictionary source could not be resolved (no user file, no template)
    #[error("Dictionary not found: {0}")]
    DictionaryNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Sentilex operations
pub type Result<T> = std::result::Result<T, SentilexError>;

/// Convert anyhow::Error to SentilexError
impl From<anyhow::Error> for SentilexError {
    fn from(err: anyhow::Error) -> Self {
        SentilexError::Other(err.to_string())
    }
}
