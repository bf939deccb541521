//! # Lexicon Core Config Errors
//!
//! Defines error types for key binding and typed coercion.
//!
//! [`ConfigError`] separates three failure classes: an invalid coercion
//! request, a raw value that cannot be coerced (and has no usable default),
//! and an operation that the key's binding does not support.
use thiserror::Error;

use crate::value::Kind;

/// Label used in messages for keys that have no path
pub const SYNTHETIC_PATH_LABEL: &str = "<synthetic>";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid coercion request: cannot resolve to a {kind} type")]
    Argument { kind: Kind },

    #[error("Unable to coerce '{path}' to {expected} (found {found}): {reason}")]
    Coercion {
        path: String,
        expected: Kind,
        found: Kind,
        reason: String,
    },

    #[error("Unsupported operation '{operation}' on '{path}': {reason}")]
    Usage {
        path: String,
        operation: String,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn coercion(path: Option<&str>, expected: Kind, found: Kind, reason: impl Into<String>) -> Self {
        ConfigError::Coercion {
            path: path.unwrap_or(SYNTHETIC_PATH_LABEL).to_string(),
            expected,
            found,
            reason: reason.into(),
        }
    }

    pub(crate) fn usage(path: Option<&str>, operation: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Usage {
            path: path.unwrap_or(SYNTHETIC_PATH_LABEL).to_string(),
            operation: operation.into(),
            reason: reason.into(),
        }
    }
}

/// Shorthand for Result with [`ConfigError`]
pub type Result<T> = std::result::Result<T, ConfigError>;
