//! Integration tests for CLI argument handling

use std::process::Command;

/// Helper to run the binary with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_newsdesk"))
        .args(args)
        .output()
        .expect("Failed to execute newsdesk")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("newsdesk"), "Help should mention newsdesk");
    assert!(stdout.contains("--port"), "Help should mention --port flag");
    assert!(
        stdout.contains("--cache-file"),
        "Help should mention --cache-file flag"
    );
}

#[test]
fn test_invalid_port_value_prints_error_and_exits() {
    let output = run_cli(&["--port", "not-a-port"]);
    assert!(!output.status.success(), "Expected invalid port to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid") || stderr.contains("Invalid"),
        "Should print error message about invalid port: {}",
        stderr
    );
}

#[test]
fn test_missing_api_key_fails_at_startup() {
    let output = Command::new(env!("CARGO_BIN_EXE_newsdesk"))
        .env_remove("API_KEY")
        .current_dir(std::env::temp_dir()) // avoid picking up a .env file
        .output()
        .expect("Failed to execute newsdesk");

    assert!(
        !output.status.success(),
        "Expected startup without API_KEY to fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("API_KEY"),
        "Error should name the missing variable: {}",
        stderr
    );
}
