//! # Lexicon Core Storage Errors
//!
//! Defines error types specific to the Lexicon storage layer.
//!
//! This module includes [`StorageSystemError`], the enum covering failures
//! while reading a settings document from disk, parsing or emitting one of the
//! supported document formats, and decoding registered serializable types.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageSystemError {
    #[error("I/O error during operation '{operation}' on path '{path}': {source}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization to '{format}' failed: {source}")]
    SerializationError {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Deserialization from '{format}' failed: {source}")]
    DeserializationError {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Unsupported configuration format: {0}")]
    UnsupportedConfigFormat(String),

    #[error("No serializer registered under alias '{0}'")]
    UnknownSerializer(String),

    #[error("Serializer '{alias}' does not produce the requested type")]
    SerializerTypeMismatch { alias: String },
}

// Helper for creating Io errors, ensuring path is always included.
impl StorageSystemError {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        StorageSystemError::Io {
            source,
            operation: operation.into(),
            path,
        }
    }
}

/// Shorthand for results produced by the storage layer
pub type Result<T> = std::result::Result<T, StorageSystemError>;
