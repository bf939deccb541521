#![cfg(test)]

use crate::config::error::ConfigError;
use crate::help::error::HelpError;
use crate::kernel::error::Error;
use crate::lang::error::LangError;
use crate::storage::error::StorageSystemError;
use crate::value::Kind;

#[test]
fn test_subsystem_errors_convert() {
    let err: Error = ConfigError::Argument { kind: Kind::Unit }.into();
    assert!(matches!(err, Error::Config(ConfigError::Argument { .. })));

    let err: Error = LangError::MalformedSpecifier(4).into();
    assert_eq!(err.to_string(), "Lang error: Malformed format specifier at byte 4");

    let err: Error = HelpError::ZeroCapacity.into();
    assert_eq!(err.to_string(), "Help error: Page capacity must be at least one line");

    let err: Error = StorageSystemError::UnknownSerializer("kit".to_string()).into();
    assert_eq!(
        err.to_string(),
        "Storage system error: No serializer registered under alias 'kit'"
    );
}

#[test]
fn test_message_errors() {
    let err: Error = "boom".into();
    assert_eq!(err.to_string(), "Error: boom");
    let err: Error = String::from("bang").into();
    assert!(matches!(err, Error::Other(msg) if msg == "bang"));
}

#[test]
fn test_io_errors_become_storage_errors() {
    let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(err, Error::StorageSystem(StorageSystemError::Io { .. })));
}
