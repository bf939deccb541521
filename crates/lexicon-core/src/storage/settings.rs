use std::path::Path;
use std::sync::{PoisonError, RwLock};

use crate::storage::config::{ConfigData, ConfigFormat};
use crate::storage::error::{Result, StorageSystemError};
use crate::storage::provider::ValueStore;
use crate::value::Value;

/// Thread-safe [`ValueStore`] over an in-memory [`ConfigData`] document.
#[derive(Debug)]
pub struct SettingsStore {
    /// Name reported to keys and log output
    name: String,
    /// The document behind the store
    data: RwLock<ConfigData>,
}

impl SettingsStore {
    /// Create a new, empty store
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_data(name, ConfigData::new())
    }

    /// Wrap an existing document
    pub fn from_data(name: impl Into<String>, data: ConfigData) -> Self {
        Self {
            name: name.into(),
            data: RwLock::new(data),
        }
    }

    /// Parse a document from text in the given format
    pub fn parse(name: impl Into<String>, content: &str, format: ConfigFormat) -> Result<Self> {
        let data = ConfigData::deserialize(content, format)?;
        Ok(Self::from_data(name, data))
    }

    /// Load a document from disk, choosing the format from the file extension.
    ///
    /// The store is named after the file stem.
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| StorageSystemError::UnsupportedConfigFormat(path.display().to_string()))?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| StorageSystemError::io(e, "read_to_string", path.to_path_buf()))?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("settings")
            .to_string();
        log::debug!("Loaded settings store '{}' from {}", name, path.display());
        Self::parse(name, &content, format)
    }

    /// Copy of the current document
    pub fn snapshot(&self) -> ConfigData {
        self.data.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Dotted paths of every value in the store
    pub fn leaf_paths(&self) -> Vec<String> {
        self.data.read().unwrap_or_else(PoisonError::into_inner).leaf_paths()
    }
}

impl ValueStore for SettingsStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, path: &str) -> Option<Value> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get_path(path)
            .cloned()
    }

    fn set(&self, path: &str, value: Value) -> Option<Value> {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_path(path, value)
    }
}
