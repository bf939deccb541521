use std::fmt::Debug;

use crate::value::Value;

/// Trait for backing stores that hold raw setting and message values.
///
/// Paths are store-relative locators; implementations decide how they map
/// onto their own layout. Each call must be atomic for its path, since keys
/// bound to the same store may be read and written from several threads.
pub trait ValueStore: Send + Sync + Debug {
    /// Get the name of this store
    fn name(&self) -> &str;

    /// Read the raw value at `path`
    fn get(&self, path: &str) -> Option<Value>;

    /// Write `value` at `path`, returning the value it replaced
    fn set(&self, path: &str, value: Value) -> Option<Value>;

    /// Check if a non-null value exists at `path`
    fn contains(&self, path: &str) -> bool {
        self.get(path).is_some_and(|v| !v.is_null())
    }
}
