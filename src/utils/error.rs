// Error handling utilities
// Author: Gabriel Demetrios Lafis

use thiserror::Error;

/// Errors raised by loading and querying job records
#[derive(Debug, Error)]
pub enum InsightsError {
    /// The path does not resolve to a readable file
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// A record lacks a field the operation needs
    #[error("missing field '{field}'")]
    MissingField { field: String },

    /// Salary range input is malformed or inverted
    #[error("invalid salary range: {0}")]
    InvalidRange(String),

    /// An aggregate was requested over zero qualifying records
    #[error("no numeric values for '{field}'")]
    EmptyResult { field: String },

    /// The selected value does not fit in a 64-bit integer
    #[error("value '{value}' of '{field}' is out of range")]
    Overflow { field: String, value: String },

    /// The file was readable but is not well-formed delimited text
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported config file format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for InsightsError
pub type InsightsResult<T> = Result<T, InsightsError>;
