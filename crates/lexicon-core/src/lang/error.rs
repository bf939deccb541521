//! # Lexicon Core Lang Errors
//!
//! Defines error types for message templating.
//!
//! Every [`LangError`] is a formatting failure: a placeholder with no
//! argument to bind, an argument whose kind the placeholder cannot render, or
//! a malformed placeholder.
use thiserror::Error;

use crate::value::Kind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LangError {
    #[error("Format specifier '{placeholder}' has no argument at position {position}")]
    MissingArgument { placeholder: String, position: usize },

    #[error("Format specifier '{placeholder}' cannot format a {found} argument")]
    IncompatibleArgument { placeholder: String, found: Kind },

    #[error("Unknown format conversion '{0}'")]
    UnknownConversion(String),

    #[error("Malformed format specifier at byte {0}")]
    MalformedSpecifier(usize),
}

/// Shorthand for Result with [`LangError`]
pub type Result<T> = std::result::Result<T, LangError>;
