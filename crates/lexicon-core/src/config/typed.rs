use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::error::{ConfigError, Result};
use crate::config::key::{Setting, ValueKey};
use crate::storage::ValueStore;
use crate::value::{FromValue, Kind, Value};

/// A setting whose raw value is coerced to a requested kind on every read.
///
/// Coercion rules:
///
/// - scalar kinds (`Bool`, `Int`, `Float`) resolve to the canonical zero when
///   the raw value is absent, and fail when it holds another kind;
/// - `Text` resolves to the textual form of any raw value, and to nothing
///   when the raw value is absent;
/// - `List` and `Map` resolve to the raw value when its kind matches, then to
///   the default when that matches, and fail otherwise.
#[derive(Debug, Clone)]
pub struct TypedValue {
    key: ValueKey,
}

impl TypedValue {
    /// Create a setting bound read/write to `store`
    pub fn new(path: impl Into<String>, default: impl Into<Value>, store: Arc<dyn ValueStore>) -> Self {
        Self::from_key(ValueKey::new(path, default, store))
    }

    /// Create a setting with no store that always reads as `default`
    pub fn synthetic(default: impl Into<Value>) -> Self {
        Self::from_key(ValueKey::synthetic(default))
    }

    pub fn from_key(key: ValueKey) -> Self {
        Self { key }
    }

    /// Bind a declared setting to a store
    pub fn of<S: Setting + ?Sized>(setting: &S, store: Arc<dyn ValueStore>) -> Self {
        Self::from_key(setting.key(store))
    }

    pub fn key(&self) -> &ValueKey {
        &self.key
    }

    pub fn path(&self) -> Option<&str> {
        self.key.path()
    }

    pub fn default_value(&self) -> &Value {
        self.key.default_value()
    }

    /// The uncoerced raw value
    pub fn get(&self) -> Option<Value> {
        self.key.raw()
    }

    /// Coerce the raw value to `kind`.
    pub fn resolve(&self, kind: Kind) -> Result<Option<Value>> {
        if kind.is_void() {
            return Err(ConfigError::Argument { kind });
        }
        let raw = self.key.raw();

        if kind.is_scalar() {
            return match raw {
                None => Ok(kind.zero()),
                Some(value) if value.kind() == kind => Ok(Some(value)),
                Some(value) => Err(ConfigError::coercion(
                    self.path(),
                    kind,
                    value.kind(),
                    "stored value is not of the requested type",
                )),
            };
        }

        let Some(raw) = raw else {
            return Ok(None);
        };
        if kind == Kind::Text {
            return Ok(Some(match raw {
                Value::Text(text) => Value::Text(text),
                other => Value::Text(other.to_string()),
            }));
        }
        if raw.kind() == kind {
            return Ok(Some(raw));
        }
        if self.default_value().kind() == kind {
            return Ok(Some(self.default_value().clone()));
        }
        Err(ConfigError::coercion(self.path(), kind, raw.kind(), "incompatible type"))
    }

    /// Resolve as a list whose every element is of kind `element`.
    pub fn resolve_list(&self, element: Kind) -> Result<Option<Vec<Value>>> {
        let Some(Value::List(items)) = self.resolve(Kind::List)? else {
            return Ok(None);
        };
        if let Some(bad) = items.iter().find(|item| item.kind() != element) {
            return Err(ConfigError::coercion(
                self.path(),
                element,
                bad.kind(),
                "inappropriate element type for list",
            ));
        }
        Ok(Some(items))
    }

    /// Resolve as a section whose every key and value match the given kinds.
    ///
    /// Section keys are always text, so any other `key` kind fails on the
    /// first entry.
    pub fn resolve_map(&self, key: Kind, value: Kind) -> Result<Option<BTreeMap<String, Value>>> {
        let Some(Value::Map(map)) = self.resolve(Kind::Map)? else {
            return Ok(None);
        };
        for entry in map.values() {
            if key != Kind::Text {
                return Err(ConfigError::coercion(
                    self.path(),
                    key,
                    Kind::Text,
                    "inappropriate key type for map",
                ));
            }
            if entry.kind() != value {
                return Err(ConfigError::coercion(
                    self.path(),
                    value,
                    entry.kind(),
                    "inappropriate value type for map",
                ));
            }
        }
        Ok(Some(map))
    }

    pub fn as_bool(&self) -> Result<bool> {
        Ok(self.resolve(Kind::Bool)?.and_then(|v| v.as_bool()).unwrap_or(false))
    }

    pub fn as_int(&self) -> Result<i64> {
        Ok(self.resolve(Kind::Int)?.and_then(|v| v.as_i64()).unwrap_or(0))
    }

    pub fn as_float(&self) -> Result<f64> {
        Ok(self.resolve(Kind::Float)?.and_then(|v| v.as_f64()).unwrap_or(0.0))
    }

    pub fn as_text(&self) -> Result<Option<String>> {
        self.get_as::<String>()
    }

    pub fn as_list(&self) -> Result<Option<Vec<Value>>> {
        Ok(match self.resolve(Kind::List)? {
            Some(Value::List(items)) => Some(items),
            _ => None,
        })
    }

    pub fn as_map(&self) -> Result<Option<BTreeMap<String, Value>>> {
        Ok(match self.resolve(Kind::Map)? {
            Some(Value::Map(map)) => Some(map),
            _ => None,
        })
    }

    /// Resolve to a statically typed value.
    ///
    /// Collections are converted element by element; one element of the
    /// wrong type fails the whole call.
    pub fn get_as<T: FromValue>(&self) -> Result<Option<T>> {
        match self.resolve(T::KIND)? {
            None => Ok(None),
            Some(value) => {
                let found = value.kind();
                T::from_value(value).map(Some).ok_or_else(|| {
                    ConfigError::coercion(self.path(), T::KIND, found, "inappropriate generic type")
                })
            }
        }
    }

    /// Typed list whose elements are all `T`
    pub fn as_list_of<T: FromValue>(&self) -> Result<Option<Vec<T>>> {
        self.get_as::<Vec<T>>()
    }

    /// Typed section whose values are all `V`
    pub fn as_map_of<V: FromValue>(&self) -> Result<Option<BTreeMap<String, V>>> {
        self.get_as::<BTreeMap<String, V>>()
    }

    /// Write a new raw value, returning the one it replaced.
    ///
    /// Fails without touching any store on synthetic settings and read-only
    /// views.
    pub fn set(&self, value: impl Into<Value>) -> Result<Option<Value>> {
        self.key.write(value.into())
    }

    /// Read this logical setting from an alternate store.
    ///
    /// The result is a read-only view sharing this setting's path and default.
    pub fn retrieve(&self, store: Arc<dyn ValueStore>) -> Result<TypedValue> {
        self.key.rebind(store).map(Self::from_key)
    }
}
