//! CLI tests for vh-server.
//!
//! Covers help output, the `version` and `check` subcommands, and argument
//! error exit codes. Serving is exercised separately in `server_e2e.rs`.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Get a Command for the vh-server binary.
fn vh_server() -> Command {
    cargo_bin_cmd!("vh-server")
}

/// Write a data file into a fresh temp dir and hand both back.
fn write_data(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("opportunities.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

// ============================================================================
// Help Tests
// ============================================================================

mod help {
    use super::*;

    #[test]
    fn help_flag_works() {
        vh_server()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Volunteer Hub"));
    }

    #[test]
    fn help_shows_all_commands() {
        vh_server()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("serve"))
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("version"));
    }

    #[test]
    fn help_shows_global_options() {
        vh_server()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--data"))
            .stdout(predicate::str::contains("--port"))
            .stdout(predicate::str::contains("--theme"))
            .stdout(predicate::str::contains("--log-format"));
    }

    #[test]
    fn serve_help_works() {
        vh_server()
            .args(["serve", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Serve the catalog over HTTP"));
    }

    #[test]
    fn check_help_works() {
        vh_server()
            .args(["check", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Validate the data file"));
    }
}

// ============================================================================
// Version Tests
// ============================================================================

mod version {
    use super::*;

    #[test]
    fn version_flag_works() {
        vh_server()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("vh-server"));
    }

    #[test]
    fn version_command_works() {
        vh_server()
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::contains("vh-server"));
    }
}

// ============================================================================
// Check Command Tests
// ============================================================================

mod check {
    use super::*;

    #[test]
    fn clean_file_passes() {
        let (_dir, path) = write_data(
            r#"[
                {"id": "vol-001", "title": "Beach Cleanup"},
                {"id": "vol-002", "title": "Food Bank Sorting"}
            ]"#,
        );
        vh_server()
            .args(["check", "--data"])
            .arg(&path)
            .assert()
            .code(0)
            .stdout(predicate::str::contains("records loaded: 2"))
            .stdout(predicate::str::contains("result: ok"));
    }

    #[test]
    fn skipped_records_warn() {
        let (_dir, path) = write_data(
            r#"[
                {"id": "vol-001"},
                {"title": "missing id"}
            ]"#,
        );
        vh_server()
            .args(["check", "--data"])
            .arg(&path)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("records loaded: 1"))
            .stdout(predicate::str::contains("records skipped: 1"))
            .stdout(predicate::str::contains("result: ok with warnings"));
    }

    #[test]
    fn missing_file_is_a_data_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        vh_server()
            .args(["check", "--data"])
            .arg(&path)
            .assert()
            .code(11)
            .stderr(predicate::str::contains("error:"));
    }

    #[test]
    fn invalid_json_is_a_data_error() {
        let (_dir, path) = write_data(r#"{"not": "an array"}"#);
        vh_server()
            .args(["check", "--data"])
            .arg(&path)
            .assert()
            .code(11)
            .stderr(predicate::str::contains("error:"));
    }

    #[test]
    fn data_path_via_environment() {
        let (_dir, path) = write_data(r#"[{"id": "vol-env"}]"#);
        vh_server()
            .arg("check")
            .env("VOLUNTEER_HUB_DATA", &path)
            .assert()
            .code(0)
            .stdout(predicate::str::contains("environment variable"))
            .stdout(predicate::str::contains("records loaded: 1"));
    }

    #[test]
    fn check_reports_the_resolved_path() {
        let (_dir, path) = write_data("[]");
        vh_server()
            .args(["check", "--data"])
            .arg(&path)
            .assert()
            .code(0)
            .stdout(predicate::str::contains("data file:"))
            .stdout(predicate::str::contains("command-line argument"));
    }
}

// ============================================================================
// Argument Error Tests
// ============================================================================

mod bad_usage {
    use super::*;

    #[test]
    fn unknown_flag_is_an_args_error() {
        vh_server().arg("--frobnicate").assert().code(10);
    }

    #[test]
    fn unknown_command_is_an_args_error() {
        vh_server().arg("launch").assert().code(10);
    }

    #[test]
    fn bad_theme_is_an_args_error() {
        vh_server()
            .args(["check", "--theme", "sepia"])
            .assert()
            .code(10)
            .stderr(predicate::str::contains("unknown theme"));
    }
}
