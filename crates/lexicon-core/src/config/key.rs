use std::fmt;
use std::sync::Arc;

use crate::config::error::{ConfigError, Result};
use crate::storage::ValueStore;
use crate::value::Value;

/// Where a key reads its raw value from.
#[derive(Clone)]
pub enum Binding {
    /// Read/write access to the key's own store
    Store(Arc<dyn ValueStore>),
    /// Read-only access to an alternate store
    View(Arc<dyn ValueStore>),
    /// No store at all; the key only carries its default
    Synthetic,
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Store(store) => write!(f, "Store({})", store.name()),
            Binding::View(store) => write!(f, "View({})", store.name()),
            Binding::Synthetic => f.write_str("Synthetic"),
        }
    }
}

/// Identity of a named logical setting: a path, a default and a binding.
///
/// A key has a path exactly when it is bound to a store. Synthetic keys
/// never touch a store and always report their default as the raw value.
#[derive(Debug, Clone)]
pub struct ValueKey {
    path: Option<String>,
    default: Value,
    binding: Binding,
}

impl ValueKey {
    /// Create a key bound read/write to `store`
    pub fn new(path: impl Into<String>, default: impl Into<Value>, store: Arc<dyn ValueStore>) -> Self {
        Self {
            path: Some(path.into()),
            default: default.into(),
            binding: Binding::Store(store),
        }
    }

    /// Create a key with no store, carrying only `default`
    pub fn synthetic(default: impl Into<Value>) -> Self {
        Self {
            path: None,
            default: default.into(),
            binding: Binding::Synthetic,
        }
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn default_value(&self) -> &Value {
        &self.default
    }

    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    /// The store this key reads from, if any
    pub fn store(&self) -> Option<&Arc<dyn ValueStore>> {
        match &self.binding {
            Binding::Store(store) | Binding::View(store) => Some(store),
            Binding::Synthetic => None,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self.binding, Binding::Synthetic)
    }

    pub fn is_writable(&self) -> bool {
        matches!(self.binding, Binding::Store(_))
    }

    /// The raw value behind this key.
    ///
    /// Synthetic keys return their default. Bound keys return whatever the
    /// store holds; a stored `Null` counts as absent.
    pub fn raw(&self) -> Option<Value> {
        let raw = match (&self.binding, &self.path) {
            (Binding::Synthetic, _) => Some(self.default.clone()),
            (Binding::Store(store) | Binding::View(store), Some(path)) => store.get(path),
            (_, None) => None,
        };
        raw.filter(|value| !value.is_null())
    }

    /// Write `value` at this key's path, returning the previous raw value.
    pub fn write(&self, value: Value) -> Result<Option<Value>> {
        match (&self.binding, &self.path) {
            (Binding::Store(store), Some(path)) => {
                Ok(store.set(path, value).filter(|previous| !previous.is_null()))
            }
            (Binding::View(store), _) => Err(ConfigError::usage(
                self.path(),
                "set",
                format!("read-only view of store '{}'", store.name()),
            )),
            _ => Err(ConfigError::usage(self.path(), "set", "synthetic value has no backing store")),
        }
    }

    /// The same path and default, bound read-only to another store.
    pub fn rebind(&self, store: Arc<dyn ValueStore>) -> Result<ValueKey> {
        match &self.path {
            Some(path) => Ok(ValueKey {
                path: Some(path.clone()),
                default: self.default.clone(),
                binding: Binding::View(store),
            }),
            None => Err(ConfigError::usage(None, "retrieve", "synthetic value has no path to look up")),
        }
    }
}

/// A declared setting, usually one variant of a fixed enumeration.
pub trait Setting {
    /// Store-relative path of the setting
    fn path(&self) -> &str;

    /// Value used when seeding a store that lacks the setting
    fn default_value(&self) -> Value;

    /// Bind this setting to a store
    fn key(&self, store: Arc<dyn ValueStore>) -> ValueKey {
        ValueKey::new(self.path(), self.default_value(), store)
    }
}

/// Write the default of every setting the store does not already hold.
///
/// Returns how many defaults were written.
pub fn seed_defaults<S, I>(store: &dyn ValueStore, settings: I) -> usize
where
    S: Setting,
    I: IntoIterator<Item = S>,
{
    let mut written = 0;
    for setting in settings {
        if !store.contains(setting.path()) {
            store.set(setting.path(), setting.default_value());
            written += 1;
        }
    }
    if written > 0 {
        log::debug!("Seeded {} default value(s) into store '{}'", written, store.name());
    }
    written
}
