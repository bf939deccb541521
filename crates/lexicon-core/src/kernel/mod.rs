//! # Lexicon Core Kernel
//!
//! Crate-wide pieces shared by every subsystem.
//!
//! ## Key Components:
//!
//! - **Runtime**: [`Runtime`](runtime::Runtime) owns the process-lifetime
//!   state, namely the [`DebugOutput`](runtime::DebugOutput) switch and the
//!   [`SerializerRegistry`](runtime::SerializerRegistry).
//! - **Core Constants**: library name, default message format and help page
//!   dimensions, in the `constants` submodule.
//! - **Error Handling**: the aggregate [`Error`](error::Error) and its
//!   `Result` alias in the `error` submodule.
pub mod constants;
pub mod error;
pub mod runtime;

pub use error::{Error, Result};
pub use runtime::{DebugOutput, Runtime, SerializerRegistry};

// Test module declaration
#[cfg(test)]
mod tests;
