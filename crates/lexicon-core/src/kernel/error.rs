//! # Lexicon Core Kernel Errors
//!
//! Defines [`Error`], the crate-wide error aggregating each subsystem's own
//! error type, and the matching `Result` alias.
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::config::error::ConfigError;
use crate::help::error::HelpError;
use crate::lang::error::LangError;
use crate::storage::error::StorageSystemError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// Settings document loading, parsing or serializer lookup
    #[error("Storage system error: {0}")]
    StorageSystem(#[from] StorageSystemError),

    /// Coercion and key usage failures
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Message formatting failures
    #[error("Lang error: {0}")]
    Lang(#[from] LangError),

    #[error("Help error: {0}")]
    Help(#[from] HelpError),

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(io_err: std::io::Error) -> Self {
        Error::StorageSystem(StorageSystemError::io(io_err, "unknown", Default::default()))
    }
}
