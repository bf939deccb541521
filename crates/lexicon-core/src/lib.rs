//! # Lexicon Core
//!
//! Typed settings keys and message templating for game-server plugins.
pub mod config;
pub mod help;
pub mod kernel;
pub mod lang;
pub mod storage;
pub mod value;

// Re-export key public types/traits for easier use by the binary and plugins
pub use config::{Setting, TypedValue, ValueKey};
pub use kernel::error::Error as KernelError;
pub use kernel::Runtime;
pub use lang::{Formatted, InternalLang, Recipient, TemplatedText};
pub use storage::{SettingsStore, ValueStore};
pub use value::{Kind, Value};
