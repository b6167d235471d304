//! Integration tests for the fastpath CLI surface.
//!
//! These tests verify argument parsing, help text, version output and
//! completion generation.

mod common;

use assert_cmd::Command;
use common::TestEnv;
use predicates::prelude::*;

/// Without a subcommand the binary fails and shows usage.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("fastpath").expect("Failed to find fastpath binary");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("fastpath").expect("Failed to find fastpath binary");

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fastpath"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("fastpath").expect("Failed to find fastpath binary");

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Fast, lexical path-string operations"));
}

/// Every subcommand is listed in the top-level help.
#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("fastpath").expect("Failed to find fastpath binary");
    let assert = cmd.arg("--help").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    for name in [
        "basename",
        "extname",
        "dirname",
        "chop-basename",
        "absolute",
        "relative",
        "directory",
        "has-trailing-separator",
        "add-trailing-separator",
        "del-trailing-separator",
        "plus",
        "cleanpath",
        "children",
        "entries",
        "completions",
    ] {
        assert!(stdout.contains(name), "help is missing {name}");
    }
}

#[test]
fn test_subcommand_help() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["basename", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--strip-ext"));
}

#[test]
fn test_unknown_subcommand() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("realpath")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_fastpath"))
        .stderr(predicate::str::contains("bash-completion"));
}

#[test]
fn test_completions_quiet_skips_hint() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["--quiet", "completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef fastpath"))
        .stderr(predicate::str::is_empty());
}
