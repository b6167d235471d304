//! Splitting a path into directory, basename and extension.
//!
//! All three splits are driven by [`PathEngine::chop_basename`], so they agree
//! on where the final segment starts and ends for every input, including
//! empty strings, bare roots and runs of separators.

use std::borrow::Cow;

use crate::path::engine::PathEngine;
use crate::path::style::PrefixKind;

/// Pattern accepted by [`PathEngine::basename`] to strip any extension.
pub const ANY_EXTENSION: &str = ".*";

/// A path split into its directory, final segment and extension.
///
/// # Examples
///
/// ```
/// use fastpath::path::{PathEngine, SeparatorStyle};
///
/// let parts = PathEngine::new(SeparatorStyle::POSIX).components("/srv/www/index.html");
/// assert_eq!(parts.directory, "/srv/www");
/// assert_eq!(parts.basename, "index.html");
/// assert_eq!(parts.extension, ".html");
/// assert_eq!(parts.stem(), "index");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathComponents<'a> {
    /// Everything before the final segment (see [`PathEngine::dirname`]).
    pub directory: Cow<'a, str>,
    /// The final segment (see [`PathEngine::basename`]).
    pub basename: &'a str,
    /// Extension of `basename`, leading dot included; may be empty.
    pub extension: &'a str,
}

impl PathComponents<'_> {
    /// The basename without its extension.
    #[must_use]
    pub fn stem(&self) -> &str {
        &self.basename[..self.basename.len() - self.extension.len()]
    }
}

impl PathEngine {
    /// Split off the final segment of `path`.
    ///
    /// Returns `(prefix, basename)` where `prefix` is everything before the
    /// segment, separators included, or `None` when there is no segment
    /// (empty input, a bare root, only separators, a bare drive).
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::path::{PathEngine, SeparatorStyle};
    ///
    /// let engine = PathEngine::new(SeparatorStyle::POSIX);
    /// assert_eq!(engine.chop_basename("/usr/lib/"), Some(("/usr/", "lib")));
    /// assert_eq!(engine.chop_basename("lib"), Some(("", "lib")));
    /// assert_eq!(engine.chop_basename("///"), None);
    /// assert_eq!(engine.chop_basename(""), None);
    /// ```
    #[must_use]
    pub fn chop_basename<'a>(&self, path: &'a str) -> Option<(&'a str, &'a str)> {
        let bytes = path.as_bytes();
        let floor = self.style().prefix(path).len;
        let end = self.trim_separators_back(bytes, floor, bytes.len());
        if end == floor {
            return None;
        }
        let mut start = end;
        while start > floor && !self.is_sep(bytes[start - 1]) {
            start -= 1;
        }
        Some((&path[..start], &path[start..end]))
    }

    /// Final segment of `path`, optionally without its extension.
    ///
    /// `strip_ext` of `".*"` removes any extension; any other non-empty value
    /// is removed only when it equals the extension exactly, and is ignored
    /// otherwise. A path made only of separators yields one separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::path::{PathEngine, SeparatorStyle};
    ///
    /// let engine = PathEngine::new(SeparatorStyle::POSIX);
    /// assert_eq!(engine.basename("/usr/lib", ""), "lib");
    /// assert_eq!(engine.basename("image.png", ".*"), "image");
    /// assert_eq!(engine.basename("image.png", ".png"), "image");
    /// assert_eq!(engine.basename("image.png", ".jpg"), "image.png");
    /// assert_eq!(engine.basename("//", ""), "/");
    /// ```
    #[must_use]
    pub fn basename<'a>(&self, path: &'a str, strip_ext: &str) -> &'a str {
        let Some((_, base)) = self.chop_basename(path) else {
            return self.bare_root_basename(path);
        };
        let ext = extension_of(base);
        if !ext.is_empty() && (strip_ext == ANY_EXTENSION || strip_ext == ext) {
            &base[..base.len() - ext.len()]
        } else {
            base
        }
    }

    fn bare_root_basename<'a>(&self, path: &'a str) -> &'a str {
        match self.root_separator(path) {
            Some(sep) => sep,
            None if self.style().prefix(path).kind == PrefixKind::Unc => &path[..1],
            None => "",
        }
    }

    /// Extension of the final segment, leading dot included.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::path::{PathEngine, SeparatorStyle};
    ///
    /// let engine = PathEngine::new(SeparatorStyle::POSIX);
    /// assert_eq!(engine.extname("archive.tar.gz"), ".gz");
    /// assert_eq!(engine.extname(".hidden"), "");
    /// assert_eq!(engine.extname("notes."), "");
    /// assert_eq!(engine.extname("pkg.d/README"), "");
    /// ```
    #[must_use]
    pub fn extname<'a>(&self, path: &'a str) -> &'a str {
        self.chop_basename(path)
            .map_or("", |(_, base)| extension_of(base))
    }

    /// Everything before the final segment.
    ///
    /// The separator run between the directory and the segment is dropped.
    /// Paths without a separator yield `.`; roots are fixed points and a run
    /// of leading separators collapses to one.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::path::{PathEngine, SeparatorStyle};
    ///
    /// let engine = PathEngine::new(SeparatorStyle::POSIX);
    /// assert_eq!(engine.dirname("/usr/lib/"), "/usr");
    /// assert_eq!(engine.dirname("/usr"), "/");
    /// assert_eq!(engine.dirname("lib"), ".");
    /// assert_eq!(engine.dirname("///"), "/");
    ///
    /// let windows = PathEngine::new(SeparatorStyle::WINDOWS);
    /// assert_eq!(windows.dirname(r"C:\Users\me"), r"C:\Users");
    /// assert_eq!(windows.dirname("C:notes.txt"), "C:.");
    /// ```
    #[must_use]
    pub fn dirname<'a>(&self, path: &'a str) -> Cow<'a, str> {
        let prefix = self.style().prefix(path);
        let floor = prefix.len;
        let head_end = self
            .chop_basename(path)
            .map_or(path.len(), |(head, _)| head.len());
        let end = self.trim_separators_back(path.as_bytes(), floor, head_end);
        if end > floor {
            return Cow::Borrowed(&path[..end]);
        }
        if head_end > floor {
            return Cow::Borrowed(&path[..=floor]);
        }
        match prefix.kind {
            PrefixKind::None => Cow::Borrowed("."),
            PrefixKind::Drive => Cow::Owned(format!("{}.", &path[..floor])),
            PrefixKind::Unc => Cow::Borrowed(&path[..floor]),
        }
    }

    /// Split `path` into directory, basename and extension in one pass.
    #[must_use]
    pub fn components<'a>(&self, path: &'a str) -> PathComponents<'a> {
        let basename = self.basename(path, "");
        let extension = if self.chop_basename(path).is_some() {
            extension_of(basename)
        } else {
            ""
        };
        PathComponents {
            directory: self.dirname(path),
            basename,
            extension,
        }
    }
}

/// Extension of a single segment: from its last dot to the end, ignoring
/// leading dots and a dot with nothing after it.
fn extension_of(segment: &str) -> &str {
    let leading_dots = segment.bytes().take_while(|&b| b == b'.').count();
    let rest = &segment[leading_dots..];
    match rest.rfind('.') {
        Some(dot) if dot + 1 < rest.len() => &rest[dot..],
        _ => "",
    }
}
