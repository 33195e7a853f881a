//! Integration tests for the iniparse CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that the binary without arguments displays usage and fails.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("iniparse").expect("Failed to find iniparse binary");

    // With clap subcommands required, no arguments should fail and show usage
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("iniparse").expect("Failed to find iniparse binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("iniparse"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag lists every command.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("iniparse").expect("Failed to find iniparse binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("sections"))
        .stdout(predicate::str::contains("completions"));
}

/// Test that global options are documented in subcommand help.
#[test]
fn test_cli_subcommand_help_shows_globals() {
    let mut cmd = Command::cargo_bin("iniparse").expect("Failed to find iniparse binary");

    cmd.args(["parse", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--delimiter"))
        .stdout(predicate::str::contains("--comment-prefix"))
        .stdout(predicate::str::contains("--no-infer-types"))
        .stdout(predicate::str::contains("--format"));
}

/// Test that an unknown subcommand fails with a usage error.
#[test]
fn test_cli_unknown_command() {
    let mut cmd = Command::cargo_bin("iniparse").expect("Failed to find iniparse binary");

    cmd.arg("frobnicate");

    cmd.assert().failure().code(2);
}

/// Test that completions are generated for bash.
#[test]
fn test_cli_completions_bash() {
    let mut cmd = Command::cargo_bin("iniparse").expect("Failed to find iniparse binary");

    cmd.args(["completions", "bash"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("iniparse"));
}

/// Test that install hints go to stderr and are hidden by --quiet.
#[test]
fn test_cli_completions_quiet_hides_hints() {
    let mut cmd = Command::cargo_bin("iniparse").expect("Failed to find iniparse binary");
    cmd.args(["completions", "zsh"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#compdef iniparse"))
        .stderr(predicate::str::contains("_iniparse"));

    let mut cmd = Command::cargo_bin("iniparse").expect("Failed to find iniparse binary");
    cmd.args(["--quiet", "completions", "zsh"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#compdef iniparse"))
        .stderr(predicate::str::is_empty());
}
