use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json;
#[cfg(feature = "yaml-config")]
use serde_yaml;
#[cfg(feature = "toml-config")]
use toml;

use crate::storage::error::{Result, StorageSystemError};
use crate::value::Value;

/// Separator between the sections of a dotted path
pub const PATH_SEPARATOR: char = '.';

/// Supported settings document formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

/// In-memory settings document.
///
/// Top-level entries are sections or values; nested sections are addressed
/// with dotted paths such as `"messages.greeting"`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfigData {
    /// Raw configuration values
    #[serde(flatten)]
    values: BTreeMap<String, Value>,
}

impl ConfigData {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Get the value at a dotted path
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split(PATH_SEPARATOR);
        let first = segments.next()?;
        let mut current = self.values.get(first)?;
        for segment in segments {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }

    /// Set the value at a dotted path, creating intermediate sections.
    ///
    /// Setting `Null` removes the entry. Returns the value previously stored.
    pub fn set_path(&mut self, path: &str, value: Value) -> Option<Value> {
        if value.is_null() {
            return self.remove_path(path);
        }
        let mut segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        let last = segments.pop()?;
        let mut section = &mut self.values;
        for segment in segments {
            let entry = section
                .entry(segment.to_string())
                .or_insert_with(|| Value::Map(BTreeMap::new()));
            section = as_section(entry)?;
        }
        section.insert(last.to_string(), value)
    }

    /// Remove the value at a dotted path
    pub fn remove_path(&mut self, path: &str) -> Option<Value> {
        let mut segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        let last = segments.pop()?;
        let mut section = &mut self.values;
        for segment in segments {
            match section.get_mut(segment) {
                Some(Value::Map(map)) => section = map,
                _ => return None,
            }
        }
        section.remove(last)
    }

    /// Check if a dotted path holds a value
    pub fn contains_path(&self, path: &str) -> bool {
        self.get_path(path).is_some()
    }

    /// Get all top-level keys
    pub fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    /// Dotted paths of every non-section value, in document order
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaves(&self.values, None, &mut paths);
        paths
    }

    /// Merge with another document, overriding existing top-level values
    pub fn merge(&mut self, other: &ConfigData) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Serialize to string based on format
    pub fn serialize(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Json => serde_json::to_string_pretty(&self).map_err(|e| {
                StorageSystemError::SerializationError {
                    format: "json".to_string(),
                    source: Box::new(e),
                }
            }),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(&self).map_err(|e| {
                StorageSystemError::SerializationError {
                    format: "yaml".to_string(),
                    source: Box::new(e),
                }
            }),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(&self).map_err(|e| {
                StorageSystemError::SerializationError {
                    format: "toml".to_string(),
                    source: Box::new(e),
                }
            }),
        }
    }

    /// Deserialize from string based on format
    pub fn deserialize(data: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Json => serde_json::from_str(data).map_err(|e| {
                StorageSystemError::DeserializationError {
                    format: "json".to_string(),
                    source: Box::new(e),
                }
            }),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => {
                // An empty YAML document is an empty settings file, not an error.
                if data.trim().is_empty() {
                    return Ok(Self::new());
                }
                serde_yaml::from_str(data).map_err(|e| StorageSystemError::DeserializationError {
                    format: "yaml".to_string(),
                    source: Box::new(e),
                })
            }
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(|e| {
                StorageSystemError::DeserializationError {
                    format: "toml".to_string(),
                    source: Box::new(e),
                }
            }),
        }
    }
}

// A scalar in the way of a dotted path is replaced by an empty section.
fn as_section(entry: &mut Value) -> Option<&mut BTreeMap<String, Value>> {
    if !matches!(entry, Value::Map(_)) {
        *entry = Value::Map(BTreeMap::new());
    }
    match entry {
        Value::Map(map) => Some(map),
        _ => None,
    }
}

fn collect_leaves(section: &BTreeMap<String, Value>, prefix: Option<&str>, out: &mut Vec<String>) {
    for (key, value) in section {
        let path = match prefix {
            Some(prefix) => format!("{}{}{}", prefix, PATH_SEPARATOR, key),
            None => key.clone(),
        };
        match value {
            Value::Map(inner) => collect_leaves(inner, Some(&path), out),
            _ => out.push(path),
        }
    }
}
