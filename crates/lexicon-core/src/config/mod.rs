//! # Lexicon Core Config
//!
//! Named settings and their typed coercion.
//!
//! ## Key Components:
//!
//! - [`ValueKey`](key::ValueKey): a path, a default and a [`Binding`](key::Binding)
//!   to a backing store (or none, for synthetic values).
//! - [`Setting`](key::Setting): implemented by the fixed enumerations that
//!   declare a plugin's settings; [`seed_defaults`](key::seed_defaults) fills a
//!   store with their defaults.
//! - [`TypedValue`](typed::TypedValue): coerces the raw value behind a key to
//!   a requested [`Kind`](crate::value::Kind), with validated list and section
//!   variants.
//! - [`ConfigError`](error::ConfigError): argument, coercion and usage failures.
pub mod error;
pub mod key;
pub mod typed;

pub use error::{ConfigError, Result};
pub use key::{seed_defaults, Binding, Setting, ValueKey};
pub use typed::TypedValue;

// Test module declaration
#[cfg(test)]
mod tests;
