//! Lexical path concatenation and cleanup.
//!
//! Neither operation touches the filesystem: `..` is resolved against the
//! textual segments only, so symlinked directories are not taken into
//! account.

use std::borrow::Cow;

use crate::path::engine::PathEngine;

const CUR_DIR: &str = ".";
const PARENT_DIR: &str = "..";

impl PathEngine {
    /// Join `other` onto `base`.
    ///
    /// An `other` with a root (or drive prefix) replaces `base` entirely.
    /// Otherwise the two are joined with one separator, leading `.` segments
    /// of `other` are dropped, and each leading `..` of `other` cancels one
    /// trailing segment of `base`. `..` never climbs above a root.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::path::{PathEngine, SeparatorStyle};
    ///
    /// let engine = PathEngine::new(SeparatorStyle::POSIX);
    /// assert_eq!(engine.plus("/usr", "bin"), "/usr/bin");
    /// assert_eq!(engine.plus("/usr/", "bin"), "/usr/bin");
    /// assert_eq!(engine.plus("/usr", "/etc"), "/etc");
    /// assert_eq!(engine.plus("/usr/lib", "../bin"), "/usr/bin");
    /// assert_eq!(engine.plus("a", "."), "a");
    /// assert_eq!(engine.plus(".", "a"), "a");
    /// assert_eq!(engine.plus("/", ".."), "/");
    /// ```
    #[must_use]
    pub fn plus<'a>(&self, base: &'a str, other: &'a str) -> Cow<'a, str> {
        let mut remainder = other;
        let mut segments: Vec<(usize, &str)> = Vec::new();
        while let Some((head, name)) = self.chop_basename(remainder) {
            segments.push((head.len(), name));
            remainder = head;
        }
        if !remainder.is_empty() {
            return Cow::Borrowed(other);
        }
        segments.reverse();

        let mut next = 0;
        let mut prefix = base;
        loop {
            while segments.get(next).is_some_and(|&(_, name)| name == CUR_DIR) {
                next += 1;
            }
            let Some((head, name)) = self.chop_basename(prefix) else {
                break;
            };
            prefix = head;
            if name == CUR_DIR {
                continue;
            }
            let cancels = name != PARENT_DIR
                && segments.get(next).is_some_and(|&(_, seg)| seg == PARENT_DIR);
            if !cancels {
                prefix = &base[..head.len() + name.len()];
                break;
            }
            next += 1;
        }

        let ends_in_segment = self.chop_basename(prefix).is_some();
        let rooted = !ends_in_segment && !self.basename(prefix, "").is_empty();
        if rooted {
            while segments.get(next).is_some_and(|&(_, name)| name == PARENT_DIR) {
                next += 1;
            }
        }

        match segments.get(next) {
            Some(&(start, _)) => {
                let suffix = &other[start..];
                if prefix.is_empty() {
                    Cow::Borrowed(suffix)
                } else if ends_in_segment || (rooted && !self.has_trailing_separator(prefix)) {
                    // A bare UNC root such as `\\srv\share` has no trailing separator
                    Cow::Owned(format!("{prefix}{}{suffix}", self.style().primary()))
                } else {
                    Cow::Owned(format!("{prefix}{suffix}"))
                }
            }
            None if ends_in_segment || rooted => Cow::Borrowed(prefix),
            None => self.dirname(prefix),
        }
    }

    /// Lexically remove `.` segments, redundant separators and `segment/..`
    /// pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::path::{PathEngine, SeparatorStyle};
    ///
    /// let engine = PathEngine::new(SeparatorStyle::POSIX);
    /// assert_eq!(engine.cleanpath_aggressive("a/./b/../c"), "a/c");
    /// assert_eq!(engine.cleanpath_aggressive("/../usr//lib/"), "/usr/lib");
    /// assert_eq!(engine.cleanpath_aggressive("../a"), "../a");
    /// assert_eq!(engine.cleanpath_aggressive(""), ".");
    /// ```
    #[must_use]
    pub fn cleanpath_aggressive<'a>(&self, path: &'a str) -> Cow<'a, str> {
        // Collected back to front.
        let mut names: Vec<&str> = Vec::new();
        let mut prefix = path;
        while let Some((head, name)) = self.chop_basename(prefix) {
            prefix = head;
            match name {
                CUR_DIR => {}
                PARENT_DIR => names.push(name),
                _ if names.last() == Some(&PARENT_DIR) => {
                    names.pop();
                }
                _ => names.push(name),
            }
        }

        let rooted = !self.basename(prefix, "").is_empty();
        if rooted {
            while names.last() == Some(&PARENT_DIR) {
                names.pop();
            }
        }
        if names.is_empty() {
            return self.dirname(prefix);
        }
        names.reverse();
        let separator = self.style().primary().to_string();
        let relative = names.join(separator.as_str());

        if rooted {
            let root = self.dirname(prefix);
            Cow::Owned(format!("{}{relative}", self.add_trailing_separator(&root)))
        } else {
            Cow::Owned(format!("{prefix}{relative}"))
        }
    }
}
