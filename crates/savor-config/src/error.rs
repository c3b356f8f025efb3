//! Error types for configuration loading and validation

use std::path::PathBuf;
use thiserror::Error;

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur during configuration loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration in {path}:\n{message}")]
    YamlError { path: PathBuf, message: String },

    /// IO error
    #[error("Failed to read configuration file: {path}\n{source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Integer value below the allowed minimum
    #[error("{field} must be > {min}, got {value}")]
    InvalidInteger {
        field: String,
        value: usize,
        min: usize,
    },

    /// Generic validation error
    #[error("Validation error: {field}: {message}")]
    ValidationError { field: String, message: String },
}

impl ConfigError {
    /// Create a YAML error from serde_yaml::Error, keeping the file path
    pub fn from_yaml_error(err: serde_yaml::Error, path: &std::path::Path) -> Self {
        Self::YamlError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}
