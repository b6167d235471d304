//! Trailing separator handling.

use std::borrow::Cow;

use crate::path::engine::PathEngine;

impl PathEngine {
    /// Check whether the last character of `path` is a separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::path::{PathEngine, SeparatorStyle};
    ///
    /// let engine = PathEngine::new(SeparatorStyle::POSIX);
    /// assert!(engine.has_trailing_separator("/a/b/"));
    /// assert!(engine.has_trailing_separator("/"));
    /// assert!(!engine.has_trailing_separator("/a/b"));
    /// ```
    #[must_use]
    pub fn has_trailing_separator(&self, path: &str) -> bool {
        path.as_bytes().last().is_some_and(|&b| self.is_sep(b))
    }

    /// Append one primary separator unless `path` already ends with a separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::path::{PathEngine, SeparatorStyle};
    ///
    /// let engine = PathEngine::new(SeparatorStyle::POSIX);
    /// assert_eq!(engine.add_trailing_separator("/usr"), "/usr/");
    /// assert_eq!(engine.add_trailing_separator("/usr/"), "/usr/");
    /// assert_eq!(engine.add_trailing_separator(""), "/");
    /// ```
    #[must_use]
    pub fn add_trailing_separator<'a>(&self, path: &'a str) -> Cow<'a, str> {
        if self.has_trailing_separator(path) {
            Cow::Borrowed(path)
        } else {
            let mut owned = String::with_capacity(path.len() + 1);
            owned.push_str(path);
            owned.push(self.style().primary());
            Cow::Owned(owned)
        }
    }

    /// Remove a trailing separator run without reducing a root to nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::path::{PathEngine, SeparatorStyle};
    ///
    /// let engine = PathEngine::new(SeparatorStyle::POSIX);
    /// assert_eq!(engine.del_trailing_separator("/usr/lib//"), "/usr/lib");
    /// assert_eq!(engine.del_trailing_separator("///"), "/");
    /// assert_eq!(engine.del_trailing_separator("lib"), "lib");
    /// ```
    #[must_use]
    pub fn del_trailing_separator<'a>(&self, path: &'a str) -> &'a str {
        if let Some((head, base)) = self.chop_basename(path) {
            &path[..head.len() + base.len()]
        } else if self.has_trailing_separator(path) {
            &path[..=self.style().prefix(path).len]
        } else {
            path
        }
    }
}
