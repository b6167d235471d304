//! Common test utilities for integration tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Names created by [`create_tree`], hidden entries included.
#[allow(dead_code)]
pub const TREE_ENTRIES: &[&str] = &["README.md", "src", "target", ".git", ".env"];

/// Creates a temporary directory holding a small project-like tree.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_tree() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for name in TREE_ENTRIES {
        let path = dir.path().join(name);
        if name.contains('.') && *name != ".git" {
            fs::write(&path, name).expect("Failed to create file");
        } else {
            fs::create_dir(&path).expect("Failed to create directory");
        }
    }
    fs::write(dir.path().join("src").join("lib.rs"), "").expect("Failed to create file");
    dir
}

/// Borrow a temp path as UTF-8.
#[allow(dead_code)]
pub fn utf8(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

/// Entry names of `dir` as the standard library lists them.
#[allow(dead_code)]
pub fn native_names(dir: &Path) -> std::collections::BTreeSet<String> {
    fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|entry| {
            entry
                .expect("Failed to read entry")
                .file_name()
                .into_string()
                .expect("entry names are UTF-8")
        })
        .collect()
}
