//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - An isolated temporary directory per test
//! - Command builders that ignore the caller's `FASTPATH_*` environment
//! - Small directory-tree fixtures for listing commands

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads.
const FASTPATH_VARS: [&str; 4] = [
    "FASTPATH_STYLE",
    "FASTPATH_CONFIG",
    "FASTPATH_INCLUDE_HIDDEN",
    "FASTPATH_LOG_MODE",
];

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with every `FASTPATH_*` variable cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("fastpath").expect("Failed to find fastpath binary");
        for var in FASTPATH_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get a command builder pinned to POSIX separator rules.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--style").arg("posix");
        cmd
    }

    /// Get a command builder pinned to Windows separator rules.
    pub fn windows(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--style").arg("windows");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// The temp path as a string.
    pub fn path_str(&self) -> &str {
        self.temp_path.to_str().expect("temp path is not UTF-8")
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file with the given contents.
    pub fn create_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::write(&path, contents).expect("Failed to create test file");
        path
    }

    /// Populate a small project tree: `README.md`, `src/`, `.git/`, `.env`.
    pub fn create_tree(&self) -> PathBuf {
        let root = self.create_dir("project");
        fs::write(root.join("README.md"), "# project\n").expect("Failed to write README");
        fs::create_dir(root.join("src")).expect("Failed to create src");
        fs::create_dir(root.join(".git")).expect("Failed to create .git");
        fs::write(root.join(".env"), "KEY=value\n").expect("Failed to write .env");
        root
    }

    /// Run a command and return its stdout lines.
    pub fn lines(&self, cmd: &mut Command) -> Vec<String> {
        let output = cmd.output().expect("Failed to run fastpath");
        assert!(
            output.status.success(),
            "fastpath failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
