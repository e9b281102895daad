//! Error types for configuration loading.

use crate::types::NonScalar;
use std::path::PathBuf;
use thiserror::Error;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to open config store at {path:?}: {message}")]
    Open { path: PathBuf, message: String },

    #[error("Config store query failed: {0}")]
    Query(String),

    #[error("Failed to write config row: {0}")]
    Write(String),

    #[error("Corrupt config row record: {0}")]
    CorruptRecord(String),

    #[error("Config store unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Why a persisted value could not be decoded.
#[derive(Debug, Error)]
pub enum MalformedReason {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("{0}")]
    NotScalar(NonScalar),
}

/// Errors surfaced by the configuration loaders
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Persistence error: {0}")]
    Persistence(#[from] StorageError),

    #[error("Malformed stored value for {namespace}/{key}: {reason}")]
    MalformedStoredValue {
        namespace: String,
        key: String,
        reason: MalformedReason,
    },

    #[error("Invalid default template {path:?}: {message}")]
    Template { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Settings(String),

    #[error("Failed to render output: {0}")]
    Render(#[source] serde_json::Error),
}

impl From<config::ConfigError> for LoadError {
    fn from(err: config::ConfigError) -> Self {
        LoadError::Settings(err.to_string())
    }
}
