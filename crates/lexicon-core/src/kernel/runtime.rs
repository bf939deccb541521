use std::any::{Any, TypeId};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::de::DeserializeOwned;

use crate::storage::error::{Result, StorageSystemError};
use crate::value::Value;

/// Switchable diagnostic output, written through the `log` facade.
#[derive(Debug)]
pub struct DebugOutput {
    enabled: AtomicBool,
}

impl Default for DebugOutput {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DebugOutput {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turn output on or off
    pub fn toggle(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Log `message` at `level`, only while output is enabled.
    pub fn print(&self, level: log::Level, message: impl fmt::Display) {
        if self.is_enabled() {
            log::log!(level, "[debug] {}", message);
        }
    }

    /// [`print`](Self::print) at info level
    pub fn info(&self, message: impl fmt::Display) {
        self.print(log::Level::Info, message);
    }

    /// Log an error regardless of whether output is enabled.
    pub fn error(&self, message: impl fmt::Display, error: &dyn std::error::Error) {
        log::error!("{}: {}", message, error);
    }
}

type Decoder = Box<dyn Fn(&Value) -> Result<Box<dyn Any + Send>> + Send + Sync>;

struct Registration {
    alias: String,
    type_id: TypeId,
    type_name: &'static str,
    decoder: Decoder,
}

/// Types that can be rebuilt from settings values, keyed by alias.
#[derive(Default)]
pub struct SerializerRegistry {
    // Registration order is kept for listing.
    registrations: Vec<Registration>,
}

impl fmt::Debug for SerializerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.registrations.iter().map(|r| (&r.alias, r.type_name)))
            .finish()
    }
}

impl SerializerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under `alias`, replacing any earlier registration of the
    /// same alias.
    pub fn register<T>(&mut self, alias: impl Into<String>)
    where
        T: DeserializeOwned + Send + 'static,
    {
        let alias = alias.into();
        let decoder: Decoder = Box::new(|value: &Value| {
            let json = serde_json::to_value(value).map_err(|e| StorageSystemError::SerializationError {
                format: "json".to_string(),
                source: Box::new(e),
            })?;
            let typed: T = serde_json::from_value(json).map_err(|e| StorageSystemError::DeserializationError {
                format: "json".to_string(),
                source: Box::new(e),
            })?;
            Ok(Box::new(typed) as Box<dyn Any + Send>)
        });
        let registration = Registration {
            alias: alias.clone(),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            decoder,
        };
        match self.registrations.iter_mut().find(|r| r.alias == alias) {
            Some(existing) => *existing = registration,
            None => self.registrations.push(registration),
        }
        log::debug!("Registered serializer '{}' for {}", alias, std::any::type_name::<T>());
    }

    pub fn is_registered(&self, alias: &str) -> bool {
        self.registrations.iter().any(|r| r.alias == alias)
    }

    /// Registered aliases in registration order
    pub fn aliases(&self) -> Vec<&str> {
        self.registrations.iter().map(|r| r.alias.as_str()).collect()
    }

    /// Rebuild the type registered under `alias` from `value`.
    pub fn decode<T: 'static>(&self, alias: &str, value: &Value) -> Result<T> {
        let registration = self
            .registrations
            .iter()
            .find(|r| r.alias == alias)
            .ok_or_else(|| StorageSystemError::UnknownSerializer(alias.to_string()))?;
        if registration.type_id != TypeId::of::<T>() {
            return Err(StorageSystemError::SerializerTypeMismatch {
                alias: alias.to_string(),
            });
        }
        (registration.decoder)(value)?
            .downcast::<T>()
            .map(|typed| *typed)
            .map_err(|_| StorageSystemError::SerializerTypeMismatch {
                alias: alias.to_string(),
            })
    }

    pub fn clear(&mut self) {
        self.registrations.clear();
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

/// Process-lifetime state: debug output and registered serializers.
///
/// Created by whatever drives the process and shut down with it.
#[derive(Debug, Default)]
pub struct Runtime {
    pub debug: DebugOutput,
    pub serializers: SerializerRegistry,
}

impl Runtime {
    /// Debug output enabled, no serializers registered
    pub fn new() -> Self {
        log::info!("{} {} runtime started", super::constants::LIB_NAME, super::constants::LIB_VERSION);
        Self::default()
    }

    /// Disable debug output and drop every registered serializer.
    pub fn shutdown(mut self) {
        self.debug.toggle(false);
        self.serializers.clear();
        log::info!("{} runtime shut down", super::constants::LIB_NAME);
    }
}
