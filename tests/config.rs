//! Tests for config parsing and defaults.

use stackkit::{Config, Level};
use std::fs;
use tempfile::tempdir;

#[test]
fn defaults_produce_a_working_logger_config() {
    let config = Config::default();
    assert_eq!(config.parse_level(), Level::Info);
    assert!(config.console.enabled);
    assert!(!config.file.enabled);
    assert_eq!(config.file.max_files, 5);
    assert_eq!(config.file.batch_size, 10);
    assert_eq!(config.file.flush_interval_ms, 5000);
    assert_eq!(config.users.store, "memory");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config.parse_level(), Level::Info);
}

#[test]
fn partial_file_overrides_only_named_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stackkit.toml");
    fs::write(
        &path,
        r#"
[general]
level = "debug"
app_name = "webapi"

[file]
enabled = true
max_file_size = "1M"
batch_size = 25
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_level(), Level::Debug);
    assert_eq!(config.general.app_name, "webapi");
    assert!(config.file.enabled);
    assert_eq!(config.file.max_file_size, "1M");
    assert_eq!(config.file.batch_size, 25);
    // Untouched fields keep defaults
    assert_eq!(config.file.max_files, 5);
    assert!(config.console.enabled);
}

#[test]
fn junk_level_falls_back_to_info() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stackkit.toml");
    fs::write(&path, "[general]\nlevel = \"shouting\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_level(), Level::Info);
}

#[test]
fn invalid_toml_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stackkit.toml");
    fs::write(&path, "[general\nlevel=").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn empty_string_parses_as_all_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stackkit.toml");
    fs::write(&path, "").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.console.colors);
    assert_eq!(config.general.app_name, "app");
}
