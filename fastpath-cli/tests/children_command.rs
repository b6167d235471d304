//! Integration tests for the `children` and `entries` commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_children_full_paths_sorted() {
    let env = TestEnv::new();
    let root = env.create_tree();
    let base = root.to_str().unwrap();

    let lines = env.lines(env.command().arg("children").arg("--sort").arg(&root));
    assert_eq!(
        lines,
        vec![
            format!("{base}/.env"),
            format!("{base}/.git"),
            format!("{base}/README.md"),
            format!("{base}/src"),
        ]
    );
}

#[test]
fn test_children_exclude_hidden() {
    let env = TestEnv::new();
    let root = env.create_tree();

    let lines = env.lines(
        env.command()
            .args(["children", "--bare", "--sort", "--exclude-hidden"])
            .arg(&root),
    );
    assert_eq!(lines, vec!["README.md", "src"]);
}

/// Listing `.` yields names joined onto `.`, which collapse to bare names.
#[test]
fn test_children_default_current_dir() {
    let env = TestEnv::new();
    env.create_file("a.txt", "");
    env.create_dir("b");

    let lines = env.lines(env.command().args(["children", "--sort"]));
    assert_eq!(lines, vec!["a.txt", "b"]);
}

/// Any spelling other than exactly `.` is kept in front of each name.
#[test]
fn test_children_dot_slash_keeps_prefix() {
    let env = TestEnv::new();
    env.create_file("a.txt", "");
    env.create_dir("b");

    let lines = env.lines(env.command().args(["children", "--sort", "./"]));
    assert_eq!(lines, vec!["./a.txt", "./b"]);
}

#[test]
fn test_children_json() {
    let env = TestEnv::new();
    let root = env.create_tree();

    let assert = env
        .command()
        .args(["children", "--bare", "--sort", "--format", "json"])
        .arg(&root)
        .assert()
        .success();
    let names: Vec<String> =
        serde_json::from_slice(&assert.get_output().stdout).expect("Invalid JSON");
    assert_eq!(names, vec![".env", ".git", "README.md", "src"]);
}

#[test]
fn test_children_config_hides_dotfiles() {
    let env = TestEnv::new();
    let root = env.create_tree();
    let config = env.create_file("fastpath.yaml", "include_hidden: false\nwith_directory: false\n");

    let lines = env.lines(
        env.command()
            .arg("--config")
            .arg(&config)
            .args(["children", "--sort"])
            .arg(&root),
    );
    assert_eq!(lines, vec!["README.md", "src"]);

    // Flags beat the file
    let lines = env.lines(
        env.command()
            .arg("--config")
            .arg(&config)
            .args(["children", "--sort", "--include-hidden"])
            .arg(&root),
    );
    assert_eq!(lines, vec![".env", ".git", "README.md", "src"]);
}

#[test]
fn test_children_env_hides_dotfiles() {
    let env = TestEnv::new();
    let root = env.create_tree();

    let lines = env.lines(
        env.command()
            .env("FASTPATH_INCLUDE_HIDDEN", "false")
            .args(["children", "--bare", "--sort"])
            .arg(&root),
    );
    assert_eq!(lines, vec!["README.md", "src"]);
}

#[test]
fn test_children_empty_directory() {
    let env = TestEnv::new();
    let empty = env.create_dir("empty");

    env.command()
        .arg("children")
        .arg(&empty)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_children_missing_directory() {
    let env = TestEnv::new();

    env.command()
        .arg("children")
        .arg(env.path().join("absent"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("path not found"));
}

#[test]
fn test_children_of_file() {
    let env = TestEnv::new();
    let file = env.create_file("plain.txt", "x");

    env.command().arg("children").arg(&file).assert().code(2);
}

#[test]
fn test_entries_dot_entries_first() {
    let env = TestEnv::new();
    let root = env.create_tree();

    let lines = env.lines(env.command().args(["entries", "--sort"]).arg(&root));
    assert_eq!(lines, vec![".", "..", ".env", ".git", "README.md", "src"]);
}

#[test]
fn test_entries_missing_directory() {
    let env = TestEnv::new();

    env.command()
        .arg("entries")
        .arg(env.path().join("absent"))
        .assert()
        .code(2);
}
