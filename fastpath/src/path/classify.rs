//! Absolute / relative classification.
//!
//! Both checks are lexical and computed independently: the empty string and
//! drive-relative paths such as `C:notes` are neither absolute nor relative.

use std::fs;

use crate::path::engine::PathEngine;
use crate::path::style::PrefixKind;

impl PathEngine {
    /// Check whether `path` is anchored at a root.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::path::{PathEngine, SeparatorStyle};
    ///
    /// let engine = PathEngine::new(SeparatorStyle::POSIX);
    /// assert!(engine.is_absolute("/etc"));
    /// assert!(!engine.is_absolute("etc"));
    /// assert!(!engine.is_absolute(""));
    /// ```
    #[must_use]
    pub fn is_absolute(&self, path: &str) -> bool {
        let prefix = self.style().prefix(path);
        if prefix.kind == PrefixKind::Unc {
            return true;
        }
        path.as_bytes()
            .get(prefix.len)
            .is_some_and(|&b| self.is_sep(b))
    }

    /// Check whether `path` is resolved against the current directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::path::{PathEngine, SeparatorStyle};
    ///
    /// let engine = PathEngine::new(SeparatorStyle::POSIX);
    /// assert!(engine.is_relative("etc"));
    /// assert!(engine.is_relative("../etc"));
    /// assert!(!engine.is_relative("/etc"));
    /// assert!(!engine.is_relative(""));
    /// ```
    #[must_use]
    pub fn is_relative(&self, path: &str) -> bool {
        !path.is_empty()
            && self.style().prefix(path).kind == PrefixKind::None
            && !self.is_absolute(path)
    }

    /// Check whether `path` names an existing directory, following symlinks.
    ///
    /// Any error while reading metadata counts as "not a directory".
    #[must_use]
    pub fn is_directory(&self, path: &str) -> bool {
        !path.is_empty() && fs::metadata(path).is_ok_and(|meta| meta.is_dir())
    }
}
