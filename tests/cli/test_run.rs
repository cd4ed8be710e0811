//! Tests for the top-level `run` entry point

use clap::Parser;
use repogate::cli::{run, Cli};
use serial_test::serial;
use std::env;
use tempfile::TempDir;

/// Point config and state at `dir`, with an unparseable config file
fn use_broken_config(dir: &TempDir) {
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[server\nport = ").unwrap();
    env::set_var("REPOGATE_CONFIG", &config);
    env::set_var("REPOGATE_STATE_DIR", dir.path().join("state"));
}

fn clear_env() {
    env::remove_var("REPOGATE_CONFIG");
    env::remove_var("REPOGATE_STATE_DIR");
}

#[test]
#[serial]
fn test_missing_fields_reported_before_config_errors() {
    let dir = TempDir::new().unwrap();
    use_broken_config(&dir);

    let err = run(Cli::parse_from(["repogate", "init"])).unwrap_err();
    assert_eq!(err.to_string(), "path is required");

    let err = run(Cli::parse_from(["repogate", "find_symbols", "--symbol", "main"])).unwrap_err();
    assert_eq!(err.to_string(), "symbol and symbol_type are required");

    clear_env();
}

#[test]
#[serial]
fn test_broken_config_fails_valid_request() {
    let dir = TempDir::new().unwrap();
    use_broken_config(&dir);

    let err = run(Cli::parse_from(["repogate", "file_tree"])).unwrap_err();
    assert!(err.to_string().starts_with("TOML parsing error"));

    clear_env();
}
