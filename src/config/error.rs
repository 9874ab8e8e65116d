//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid session name for {field}: {reason}")]
    InvalidSessionName { field: &'static str, reason: String },

    #[error("Default and placeholder session names must differ")]
    SessionNamesCollide,

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),

    #[error("Unsupported snapshot file extension: {0}")]
    UnsupportedSnapshotFormat(String),
}
