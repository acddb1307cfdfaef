//! Defaults loading tests against the in-memory system

use unitconv::config::{Defaults, TemperatureDefaults};
use unitconv::error::ConvertError;
use unitconv::system::MockSystem;

const CUSTOM: &[u8] =
    br#"{ "precision": 0, "temperature": { "defaultFrom": "K", "defaultTo": "C" } }"#;

#[test]
fn test_load_builtin_when_no_path() {
    let system = MockSystem::new();
    let defaults = Defaults::load(&system, None).unwrap();
    assert_eq!(defaults, Defaults::builtin().unwrap());
}

#[test]
fn test_load_absolute_path() {
    let system = MockSystem::new()
        .with_file("/etc/convert/defaults.json", CUSTOM)
        .unwrap();
    let defaults = Defaults::load(&system, Some("/etc/convert/defaults.json")).unwrap();
    assert_eq!(
        defaults,
        Defaults {
            precision: 0,
            temperature: TemperatureDefaults {
                default_from: "K".to_owned(),
                default_to: "C".to_owned(),
            },
        }
    );
}

#[test]
fn test_load_relative_to_current_dir() {
    let system = MockSystem::new()
        .with_current_dir("/work")
        .unwrap()
        .with_file("/work/conf/defaults.json", CUSTOM)
        .unwrap();
    let defaults = Defaults::load_from_file(&system, "conf/defaults.json").unwrap();
    assert_eq!(defaults.precision, 0);
}

#[test]
fn test_missing_file() {
    let system = MockSystem::new();
    let err = Defaults::load_from_file(&system, "missing.json").unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConvertError>(),
        Some(&ConvertError::configuration(
            "Configuration file not found: missing.json"
        ))
    );
}

#[test]
fn test_directory_is_not_a_file() {
    let system = MockSystem::new()
        .with_file("/conf/defaults.json", CUSTOM)
        .unwrap();
    let err = Defaults::load_from_file(&system, "/conf").unwrap_err();
    assert!(err.to_string().contains("not a file"));
}

#[test]
fn test_schema_violation() {
    let system = MockSystem::new()
        .with_file(
            "/defaults.json",
            br#"{ "precision": "two", "temperature": { "defaultFrom": "C", "defaultTo": "F" } }"#,
        )
        .unwrap();
    let err = Defaults::load_from_file(&system, "/defaults.json").unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Configuration validation failed"), "{message}");
    assert!(message.contains("Defaults do not match the schema"), "{message}");
}

#[test]
fn test_unknown_default_unit() {
    let system = MockSystem::new()
        .with_file(
            "/defaults.json",
            br#"{ "precision": 2, "temperature": { "defaultFrom": "C", "defaultTo": "R" } }"#,
        )
        .unwrap();
    let err = Defaults::load_from_file(&system, "/defaults.json").unwrap_err();
    assert!(
        format!("{err:#}").contains("temperature.defaultTo 'R' is not one of C, F, K")
    );
}
