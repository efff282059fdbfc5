//! CLI integration tests

use std::process::Command;

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "inventory-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("CLI client for the mock CCE inventory tool server"),
        "Should show app description"
    );
    assert!(stdout.contains("tools"), "Should show tools command");
    assert!(stdout.contains("clusters"), "Should show clusters command");
    assert!(
        stdout.contains("namespaces"),
        "Should show namespaces command"
    );
    assert!(stdout.contains("pods"), "Should show pods command");
    assert!(stdout.contains("logs"), "Should show logs command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(["run", "-p", "inventory-cli", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("ccei"), "Should show binary name");
}

/// Test clusters subcommand help
#[test]
fn test_clusters_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "inventory-cli", "--", "clusters", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Clusters help should succeed");
    assert!(stdout.contains("--region"), "Should show region option");
    assert!(
        stdout.contains("--project-id"),
        "Should show project-id option"
    );
}

/// Test namespaces subcommand help
#[test]
fn test_namespaces_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "inventory-cli", "--", "namespaces", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Namespaces help should succeed");
    assert!(
        stdout.contains("CLUSTER_ID"),
        "Should show cluster id argument"
    );
    assert!(stdout.contains("--region"), "Should show region option");
}

/// Test pods subcommand help
#[test]
fn test_pods_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "inventory-cli", "--", "pods", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Pods help should succeed");
    assert!(
        stdout.contains("CLUSTER_ID"),
        "Should show cluster id argument"
    );
    assert!(
        stdout.contains("NAMESPACE"),
        "Should show namespace argument"
    );
}

/// Test logs subcommand help
#[test]
fn test_logs_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "inventory-cli", "--", "logs", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Logs help should succeed");
    assert!(
        stdout.contains("POD_NAME"),
        "Should show pod name argument"
    );
}

/// Test format option
#[test]
fn test_format_option() {
    let output = Command::new("cargo")
        .args(["run", "-p", "inventory-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("--format"), "Should show format option");
    assert!(stdout.contains("table"), "Should show table format");
    assert!(stdout.contains("json"), "Should show json format");
}

/// Test server-url option
#[test]
fn test_server_url_option() {
    let output = Command::new("cargo")
        .args(["run", "-p", "inventory-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("--server-url"),
        "Should show server-url option"
    );
    assert!(stdout.contains("CCEI_SERVER_URL"), "Should show env var");
}

/// Test invalid command error handling
#[test]
fn test_invalid_command() {
    let output = Command::new("cargo")
        .args(["run", "-p", "inventory-cli", "--", "invalid-command"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unrecognized subcommand") || stderr.contains("error"),
        "Should show an error"
    );
}
