//! Tests for configuration loading.

use std::io::Write;
use std::path::PathBuf;
use tictactoe::Config;
use tictactoe_core::Difficulty;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
    assert_eq!(config.log_filter(), "info");
    assert_eq!(*config.default_difficulty(), Difficulty::Easy);
}

#[test]
fn test_loads_all_keys() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
log_file = "game.log"
log_filter = "debug"
default_difficulty = "Hard"
"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(*config.default_difficulty(), Difficulty::Hard);
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"default_difficulty = "Difficult""#).unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(*config.default_difficulty(), Difficulty::Hard);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_difficulty = \"Impossible\"").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_log_file_override() {
    let config = Config::default().with_log_file(PathBuf::from("/tmp/other.log"));
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/other.log"));
}
