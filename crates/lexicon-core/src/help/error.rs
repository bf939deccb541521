//! # Lexicon Core Help Errors
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HelpError {
    #[error("Page capacity must be at least one line")]
    ZeroCapacity,
}

/// Shorthand for Result with [`HelpError`]
pub type Result<T> = std::result::Result<T, HelpError>;
