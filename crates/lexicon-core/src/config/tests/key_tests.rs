#![cfg(test)]

use std::sync::Arc;

use crate::config::error::ConfigError;
use crate::config::key::{seed_defaults, Binding, Setting, ValueKey};
use crate::storage::{ConfigFormat, SettingsStore, ValueStore};
use crate::value::Value;

#[derive(Debug, Clone, Copy)]
enum ArenaSetting {
    MaxPlayers,
    Spawn,
    Motd,
}

impl ArenaSetting {
    const ALL: [ArenaSetting; 3] = [ArenaSetting::MaxPlayers, ArenaSetting::Spawn, ArenaSetting::Motd];
}

impl Setting for ArenaSetting {
    fn path(&self) -> &str {
        match self {
            ArenaSetting::MaxPlayers => "arena.max-players",
            ArenaSetting::Spawn => "arena.spawn",
            ArenaSetting::Motd => "motd",
        }
    }

    fn default_value(&self) -> Value {
        match self {
            ArenaSetting::MaxPlayers => Value::from(16),
            ArenaSetting::Spawn => Value::from(vec![0, 64, 0]),
            ArenaSetting::Motd => Value::from("Welcome"),
        }
    }
}

#[test]
fn test_bound_key_reads_store() {
    let store = Arc::new(SettingsStore::new("arena"));
    store.set("arena.max-players", Value::from(24));

    let key = ArenaSetting::MaxPlayers.key(store.clone());
    assert_eq!(key.path(), Some("arena.max-players"));
    assert_eq!(key.default_value(), &Value::Int(16));
    assert_eq!(key.raw(), Some(Value::Int(24)));
    assert!(key.is_writable());
    assert!(!key.is_synthetic());
    assert_eq!(key.store().map(|s| s.name().to_string()), Some("arena".to_string()));
}

#[test]
fn test_stored_null_is_absent() {
    let store = Arc::new(
        SettingsStore::parse("arena", r#"{"motd": null}"#, ConfigFormat::Json).expect("valid json"),
    );
    assert_eq!(store.get("motd"), Some(Value::Null));
    let key = ValueKey::new("motd", "Welcome", store);
    assert_eq!(key.raw(), None);
}

#[test]
fn test_synthetic_key_uses_default() {
    let key = ValueKey::synthetic("just text");
    assert_eq!(key.path(), None);
    assert!(key.is_synthetic());
    assert!(key.store().is_none());
    assert_eq!(key.raw(), Some(Value::from("just text")));
    assert!(matches!(key.binding(), Binding::Synthetic));
}

#[test]
fn test_synthetic_key_rejects_write_and_rebind() {
    let key = ValueKey::synthetic(1);
    let err = key.write(Value::from(2)).unwrap_err();
    assert!(matches!(err, ConfigError::Usage { ref operation, .. } if operation == "set"));

    let other: Arc<dyn ValueStore> = Arc::new(SettingsStore::new("other"));
    let err = key.rebind(other).unwrap_err();
    assert!(matches!(err, ConfigError::Usage { ref operation, .. } if operation == "retrieve"));
}

#[test]
fn test_rebind_is_read_only_view() {
    let primary = Arc::new(SettingsStore::new("primary"));
    let backup = Arc::new(SettingsStore::new("backup"));
    backup.set("motd", Value::from("From backup"));

    let key = ArenaSetting::Motd.key(primary.clone());
    let view = key.rebind(backup.clone()).unwrap();

    assert_eq!(view.path(), key.path());
    assert_eq!(view.raw(), Some(Value::from("From backup")));
    assert!(!view.is_writable());
    assert!(view.write(Value::from("nope")).is_err());
    assert_eq!(backup.get("motd"), Some(Value::from("From backup")));
    assert_eq!(primary.get("motd"), None);
}

#[test]
fn test_seed_defaults_only_fills_missing() {
    let store = SettingsStore::new("arena");
    store.set("motd", Value::from("Custom"));

    let written = seed_defaults(&store, ArenaSetting::ALL);
    assert_eq!(written, 2);
    assert_eq!(store.get("motd"), Some(Value::from("Custom")));
    assert_eq!(store.get("arena.max-players"), Some(Value::Int(16)));
    assert_eq!(store.get("arena.spawn"), Some(Value::from(vec![0, 64, 0])));

    assert_eq!(seed_defaults(&store, ArenaSetting::ALL), 0);
}
