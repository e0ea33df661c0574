//! Tests for loading the frontend config from disk.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use strictly_timetravel_tui::TuiConfig;

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("strictly_timetravel.toml");
    fs::write(
        &path,
        r#"log_file = "game.log"
log_filter = "debug,strictly_timetravel=trace"
mouse = false
"#,
    )
    .expect("Failed to write TOML");

    let config = TuiConfig::load(Some(path.as_path())).expect("Load failed");
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "debug,strictly_timetravel=trace");
    assert!(!config.mouse());
    assert_eq!(*config.poll_interval_ms(), 100);
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = TuiConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");

    let err = TuiConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_wrong_type_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("typed.toml");
    fs::write(&path, "mouse = \"yes\"").expect("Write failed");

    assert!(TuiConfig::from_file(&path).is_err());
}
