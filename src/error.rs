//! Error types for reaction-picker
//!
//! The picker control itself never fails; misconfiguration is ignored.
//! These errors come from reading and converting the config file.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for reaction-picker
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

/// Result type alias for PickerError
pub type Result<T> = std::result::Result<T, PickerError>;
