//! Integration tests for unpak-cli.
//!
//! Each test spawns the built binary against a small fixture package and
//! asserts on its streams and exit status.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn unpak_cmd() -> Command {
    cargo_bin_cmd!("unpak")
}

#[test]
fn test_version_flag() {
    unpak_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unpak"));
}

#[test]
fn test_help_flag() {
    unpak_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line utility"));
}

#[test]
fn test_extract_help() {
    unpak_cmd()
        .arg("extract")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extract package contents"));
}

#[test]
fn test_probe_help() {
    unpak_cmd()
        .arg("probe")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Probe a package"));
}

/// End-to-end wiring check: extract exits zero and reports the
/// destination.
#[test]
fn test_extract_runs_successfully() {
    let temp = TempDir::new().expect("failed to create temp dir");

    unpak_cmd()
        .arg("extract")
        .arg(fixture_path("sample.zip"))
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Extraction complete"));
}

/// The extracted tree holds the package's files with their contents.
#[test]
fn test_extract_creates_files() {
    let temp = TempDir::new().expect("failed to create temp dir");

    unpak_cmd()
        .arg("extract")
        .arg(fixture_path("sample.zip"))
        .arg(temp.path())
        .assert()
        .success();

    let content =
        std::fs::read_to_string(temp.path().join("sample.txt")).expect("sample.txt not extracted");
    assert_eq!(content, "Hello from unpak!\n");
    assert!(temp.path().join("docs").join("guide.md").exists());
}

/// Tests that omitting the output directory extracts into the current one.
#[test]
fn test_extract_defaults_to_current_dir() {
    let temp = TempDir::new().expect("failed to create temp dir");

    unpak_cmd()
        .current_dir(temp.path())
        .arg("extract")
        .arg(fixture_path("sample.zip"))
        .assert()
        .success();

    assert!(temp.path().join("sample.txt").exists());
}

/// Tests that a missing output directory is created before extraction.
#[test]
fn test_extract_creates_missing_output_dir() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let nested = temp.path().join("out").join("nested");

    unpak_cmd()
        .arg("extract")
        .arg(fixture_path("sample.zip"))
        .arg(&nested)
        .assert()
        .success();

    assert!(nested.join("sample.txt").exists());
}

/// A path that does not exist fails with an error on stderr.
#[test]
fn test_extract_nonexistent_archive() {
    let temp = TempDir::new().expect("failed to create temp dir");

    unpak_cmd()
        .arg("extract")
        .arg("nonexistent.zip")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

/// Tests that extraction is driven by content, and content nothing can
/// open produces an actionable error.
#[test]
fn test_extract_unrecognized_content() {
    let temp = TempDir::new().expect("failed to create temp dir");

    unpak_cmd()
        .arg("extract")
        .arg(fixture_path("notes.txt"))
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not recognized"))
        .stderr(predicate::str::contains("HINT"));
}

#[test]
fn test_extract_quiet_mode() {
    let temp = TempDir::new().expect("failed to create temp dir");

    let output = unpak_cmd()
        .arg("--quiet")
        .arg("extract")
        .arg(fixture_path("sample.zip"))
        .arg(temp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert!(output.is_empty(), "quiet mode must not print to stdout");
    assert!(temp.path().join("sample.txt").exists());
}

/// Tests that --verbose surfaces the extraction log line on stderr.
#[test]
fn test_extract_verbose_logs_to_stderr() {
    let temp = TempDir::new().expect("failed to create temp dir");

    unpak_cmd()
        .env_remove("RUST_LOG")
        .arg("--verbose")
        .arg("extract")
        .arg(fixture_path("sample.zip"))
        .arg(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Extracting"));
}

#[test]
fn test_probe_zip_package() {
    unpak_cmd()
        .arg("probe")
        .arg(fixture_path("sample.zip"))
        .assert()
        .success()
        .stdout(predicate::str::contains("zip"))
        .stdout(predicate::str::contains("2 files"));
}

/// The JSON envelope carries the operation, status, and probe data.
#[test]
fn test_probe_json_output() {
    let output = unpak_cmd()
        .arg("probe")
        .arg("--json")
        .arg(fixture_path("sample.zip"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "success");
    assert_eq!(json["operation"], "probe");
    assert_eq!(json["data"]["format"], "zip");
    assert_eq!(json["data"]["files"], 2);
}

/// Tests that a package no format can open exits non-zero.
#[test]
fn test_probe_undetermined_exits_nonzero() {
    unpak_cmd()
        .arg("probe")
        .arg(fixture_path("fake.zip"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("format undetermined"));
}

#[test]
fn test_probe_undetermined_json_envelope() {
    let output = unpak_cmd()
        .arg("probe")
        .arg("--json")
        .arg(fixture_path("fake.zip"))
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "error");
    assert_eq!(json["operation"], "probe");
    assert_eq!(json["error"], "format undetermined");
}

/// Tests that extensions outside the probe table are rejected up front.
#[test]
fn test_probe_unknown_extension() {
    unpak_cmd()
        .arg("probe")
        .arg(fixture_path("notes.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("extension"))
        .stderr(predicate::str::contains("HINT"));
}

#[test]
fn test_probe_quiet_mode() {
    let output = unpak_cmd()
        .arg("--quiet")
        .arg("probe")
        .arg(fixture_path("sample.zip"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert!(output.is_empty(), "quiet mode must not print to stdout");
}

#[test]
fn test_probe_quiet_with_json_produces_no_output() {
    // --quiet takes precedence, even with --json
    let output = unpak_cmd()
        .arg("--quiet")
        .arg("probe")
        .arg("--json")
        .arg(fixture_path("sample.zip"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert!(output.is_empty());
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    unpak_cmd()
        .arg("--quiet")
        .arg("--verbose")
        .arg("probe")
        .arg(fixture_path("sample.zip"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
