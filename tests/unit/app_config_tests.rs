/*!
 * Tests for application configuration functionality
 */

#![allow(non_snake_case)]

use lineconv::app_config::{Config, LogLevel};

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.source_culture_name, "en-US");
    assert!(!config.verbose);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousCultures_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.source_culture_name = "fr-FR".to_string();
    assert!(config.validate().is_ok());

    // The empty name is the invariant culture
    config.source_culture_name = String::new();
    assert!(config.validate().is_ok());

    config.source_culture_name = "xx-YY".to_string();
    assert!(config.validate().is_err());
}

/// Test that a missing settings file falls back to the defaults
#[test]
fn test_load_or_default_withMissingFile_shouldReturnDefaults() {
    let temp_dir = common::create_temp_dir().unwrap();
    let missing = temp_dir.path().join("no_such_conf.json");

    let config = Config::load_or_default(&missing);
    assert_eq!(config.source_culture_name, "en-US");
    assert!(!config.verbose);
}

/// Test that a malformed settings file falls back to the defaults
#[test]
fn test_load_or_default_withMalformedFile_shouldReturnDefaults() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json !").unwrap();

    let config = Config::load_or_default(&path);
    assert_eq!(config.source_culture_name, "en-US");
}

/// Test that a valid settings file is honored
#[test]
fn test_load_or_default_withValidFile_shouldLoadValues() {
    let temp_dir = common::create_temp_dir().unwrap();
    let content = r#"{ "source_culture_name": "ru-RU", "verbose": true, "log_level": "debug" }"#;
    let path = common::create_test_file(temp_dir.path(), "conf.json", content).unwrap();

    let config = Config::load_or_default(&path);
    assert_eq!(config.source_culture_name, "ru-RU");
    assert!(config.verbose);
    assert_eq!(config.log_level, LogLevel::Debug);
}

/// Test that omitted fields take their individual defaults
#[test]
fn test_load_or_default_withPartialFile_shouldFillFieldDefaults() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path =
        common::create_test_file(temp_dir.path(), "conf.json", r#"{ "verbose": true }"#).unwrap();

    let config = Config::load_or_default(&path);
    assert_eq!(config.source_culture_name, "en-US");
    assert!(config.verbose);
    assert_eq!(config.log_level, LogLevel::Info);
}
