//! Tests for loading the TOML configuration.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_history::AppConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
    assert!(*config.show_square_numbers());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"debug,tictactoe_history=trace\"").unwrap();
    writeln!(file, "show_square_numbers = false").unwrap();

    let config = AppConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.log_filter(), "debug,tictactoe_history=trace");
    assert!(!*config.show_square_numbers());
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_square_numbers = \"sometimes\"").unwrap();

    let err = AppConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
