//! End-to-end runs of the `hello-cli` binary
//!
//! Each run gets its own working directory and home so no config file from
//! the host is picked up.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hello-cli"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("HELLO_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("HELLO_LOG_FORMAT")
        .output()
        .expect("hello-cli should execute")
}

#[test]
fn test_greet_writes_exact_bytes() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["--no-color", "greet", "World"]);

    assert!(output.status.success());
    assert_eq!(output.stdout, b"Hello, World!\n");
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_greet_uses_config_default_name() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".hello.yaml"), "default_name: Ferris\n").unwrap();

    let output = run(dir.path(), &["--no-color", "greet"]);
    assert!(output.status.success());
    assert_eq!(output.stdout, b"Hello, Ferris!\n");
}

#[test]
fn test_square_json_output() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["-o", "json", "square", "-2"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["x"].as_f64(), Some(-2.0));
    assert_eq!(value["result"].as_f64(), Some(4.0));
}

#[test]
fn test_broken_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".hello.yaml"), "default_name: [unclosed\n").unwrap();

    let output = run(dir.path(), &["--no-color", "greet"]);
    assert!(output.status.success());
    assert_eq!(output.stdout, b"Hello, World!\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to load config from .hello.yaml"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_invalid_log_format_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".hello.yaml"), "logging:\n  format: xml\n").unwrap();

    let output = run(dir.path(), &["--no-color", "greet"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid log format in config: xml"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_missing_explicit_config_exit_code() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["--no-color", "-c", "absent.yaml", "greet"]);

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}
