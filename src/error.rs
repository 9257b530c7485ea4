//! Custom error types for afford
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for afford operations
#[derive(Error, Debug)]
pub enum AffordError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Invalid user input (amounts, currency codes)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Scenario loading errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl AffordError {
    /// Create an error for a currency code outside the supported set
    pub fn unknown_currency(code: impl AsRef<str>) -> Self {
        Self::Validation(format!(
            "Unknown currency '{}'. Expected one of SAR, USD, EUR, AED",
            code.as_ref()
        ))
    }
}

impl From<std::io::Error> for AffordError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AffordError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for AffordError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for afford operations
pub type AffordResult<T> = Result<T, AffordError>;
