//! Integration tests for error handling and exit codes.
//!
//! These tests verify that pathmap handles errors correctly and returns
//! appropriate exit codes:
//! - Exit code 0: Success
//! - Exit code 1: Semantic failure (validation errors)
//! - Exit code 4: Invalid arguments
//! - Exit code 5: I/O error
//! - Exit code 6: Other library errors
//! - Exit code 7: Configuration error
//!
//! Every failure is reported before any output is written.

mod common;

use common::{TestEnv, STUDIO_CONFIG};
use predicates::prelude::*;

// ============================================================================
// Success Cases (Exit Code 0)
// ============================================================================

#[test]
fn test_success_exit_code() {
    let env = TestEnv::with_project_config(STUDIO_CONFIG);

    env.command().args(["remap", "--to", "linux", "x"]).assert().code(0);
    env.command().args(["replace", "x"]).assert().code(0);
    env.command().args(["normalize", "x"]).assert().code(0);
    env.command().args(["detect", "x"]).assert().code(0);
}

#[test]
fn test_no_matches_is_not_an_error() {
    let env = TestEnv::with_project_config(STUDIO_CONFIG);

    env.command()
        .args(["remap", "--to", "windows", "/srv//render/../cache/x.abc"])
        .assert()
        .code(0)
        .stdout("/srv//render/../cache/x.abc\n");
}

#[test]
fn test_empty_stdin_produces_no_output() {
    let env = TestEnv::with_project_config(STUDIO_CONFIG);

    env.command()
        .args(["remap", "--to", "linux"])
        .write_stdin("")
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

// ============================================================================
// Invalid Arguments (Exit Code 4)
// ============================================================================

#[test]
fn test_unsupported_destination_exit_code() {
    let env = TestEnv::with_project_config(STUDIO_CONFIG);

    env.command()
        .args(["remap", "--to", "beos", "x"])
        .assert()
        .code(4)
        .stderr(predicate::str::starts_with("Error: passed platform: 'beos'"));
}

#[test]
fn test_invalid_format_is_rejected_by_parser() {
    let env = TestEnv::new();

    env.command()
        .args(["normalize", "--format", "xml", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid output format"));
}

// ============================================================================
// I/O Errors (Exit Code 5)
// ============================================================================

#[test]
fn test_missing_mapping_file_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["remap", "--to", "linux", "--mapping", "missing.yaml", "x"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("I/O error"));
}

// ============================================================================
// Library Errors (Exit Code 6)
// ============================================================================

#[test]
fn test_destination_missing_from_table_exit_code() {
    let env = TestEnv::new();
    env.write_project_file("mapping.yaml", "windows: ['L:\\']\nlinux: [/mnt/storage1]\n");

    env.command()
        .args(["remap", "--to", "mac", "--mapping", "mapping.yaml", "x"])
        .assert()
        .code(6)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            r#"input mapping: {windows: ["L:\\"], linux: ["/mnt/storage1"]}"#,
        ));
}

#[test]
fn test_mismatched_mapping_file_exit_code() {
    let env = TestEnv::new();
    env.write_project_file(
        "mapping.yaml",
        "windows: ['L:\\', 'P:\\']\nlinux: [/mnt/storage1]\n",
    );

    env.command()
        .args(["remap", "--to", "linux", "--mapping", "mapping.yaml", "x"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains(
            "paths lists in mapping should have the same size",
        ));
}

// ============================================================================
// Configuration Errors (Exit Code 7)
// ============================================================================

#[test]
fn test_malformed_project_config_exit_code() {
    let env = TestEnv::with_project_config(
        "platforms:\n  windows: ['L:\\', 'P:\\']\n  linux: [/mnt/storage1]\n",
    );

    env.command()
        .args(["remap", "--to", "linux", "x"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unsupported_platform_in_config_exit_code() {
    let env = TestEnv::with_project_config("destination: amiga\n");

    env.command()
        .args(["replace", "x"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_explicit_config_file_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["--config", "nowhere.yaml", "normalize", "--format", "plain", "x"])
        .assert()
        .code(0);

    env.command()
        .args(["--config", "nowhere.yaml", "detect", "x"])
        .assert()
        .code(7)
        .stdout(predicate::str::is_empty());

    env.command()
        .args(["--config", "nowhere.yaml", "replace", "x"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("nowhere.yaml"));
}

#[test]
fn test_invalid_environment_value_exit_code() {
    let env = TestEnv::with_project_config(STUDIO_CONFIG);

    env.command()
        .env("PATHMAP_OUTPUT_FORMAT", "xml")
        .args(["replace", "x"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("PATHMAP_OUTPUT_FORMAT"));
}
