/*!
 * Tests for application configuration
 */

use anyhow::Result;
use log::LevelFilter;
use std::path::PathBuf;
use bisplit::app_config::{Config, LogLevel, ReaderConfig};
use crate::common;

#[test]
fn test_default_config_shouldWriteToCurrentDirectory() {
    let config = Config::default();
    assert_eq!(config.output_dir, PathBuf::from("."));
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.readers.json_extensions, vec!["json".to_string()]);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_or_default_withMissingFile_shouldReturnDefaults() -> Result<()> {
    let config = Config::load_or_default("no_such_config_file.json")?;
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn test_load_or_default_withPartialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "bisplit.json",
        r#"{ "output_dir": "out", "log_level": "debug" }"#,
    )?;

    let config = Config::load_or_default(&path)?;

    assert_eq!(config.output_dir, PathBuf::from("out"));
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.readers, ReaderConfig::default());
    Ok(())
}

#[test]
fn test_load_or_default_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "bisplit.json", "{ output_dir: ")?;

    let err = Config::load_or_default(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_validate_withFileAsOutputDir_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "occupied", "")?;

    let config = Config {
        output_dir: file,
        ..Config::default()
    };

    assert!(config.validate().is_err());
    Ok(())
}

#[test]
fn test_validate_withEmptyExtension_shouldFail() {
    let config = Config {
        readers: ReaderConfig {
            json_extensions: vec![".".to_string()],
        },
        ..Config::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_log_level_toLevelFilter_shouldMapEachLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), LevelFilter::Trace);
}

#[test]
fn test_config_serialization_shouldUseLowercaseLogLevel() -> Result<()> {
    let json = serde_json::to_string(&Config::default())?;
    assert!(json.contains("\"log_level\":\"info\""));
    Ok(())
}
