//! # Lexicon Core Storage
//!
//! Backing stores for settings and message keys.
//!
//! - [`ValueStore`]: the trait every backing store implements.
//! - [`ConfigData`] / [`ConfigFormat`]: a serde-backed settings document with
//!   dotted-path access, readable from JSON, YAML and TOML.
//! - [`SettingsStore`]: a lock-guarded `ConfigData` usable as a shared store.
pub mod config;
pub mod error;
pub mod provider;
pub mod settings;

/// Re-export key types
pub use config::{ConfigData, ConfigFormat, PATH_SEPARATOR};
pub use error::StorageSystemError;
pub use provider::ValueStore;
pub use settings::SettingsStore;
