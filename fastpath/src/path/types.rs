//! The owned path value.
//!
//! [`FsPath`] is what callers import instead of patching the standard string
//! and path types: an immutable string with the engine's operations as
//! methods, all evaluated with the process-wide separator style.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::children::ChildrenOptions;
use crate::path::convert::AsPathString;
use crate::path::engine::PathEngine;

/// An immutable path string.
///
/// No normalization happens on construction: trailing separators, `.` and
/// `..` segments and the empty string are all kept as given.
///
/// # Examples
///
/// ```
/// use fastpath::FsPath;
///
/// let path = FsPath::new("/usr/lib/libc.so");
/// assert_eq!(path.basename(), "libc.so");
/// assert_eq!(path.extname(), ".so");
/// assert_eq!(path.dirname(), "/usr/lib");
/// assert!(path.is_absolute());
///
/// let bin = FsPath::new("/usr/lib") + "../bin";
/// assert_eq!(bin.as_str(), "/usr/bin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FsPath {
    inner: String,
}

impl FsPath {
    /// Create a path from anything string-like.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { inner: path.into() }
    }

    /// Borrow the path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.inner
    }

    fn engine() -> PathEngine {
        PathEngine::current()
    }

    /// Final segment (see [`PathEngine::basename`]).
    #[must_use]
    pub fn basename(&self) -> &str {
        Self::engine().basename(&self.inner, "")
    }

    /// Extension of the final segment (see [`PathEngine::extname`]).
    #[must_use]
    pub fn extname(&self) -> &str {
        Self::engine().extname(&self.inner)
    }

    /// Parent directory (see [`PathEngine::dirname`]).
    #[must_use]
    pub fn dirname(&self) -> FsPath {
        FsPath::new(Self::engine().dirname(&self.inner))
    }

    /// Whether the path is anchored at a root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        Self::engine().is_absolute(&self.inner)
    }

    /// Whether the path is resolved against the current directory.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        Self::engine().is_relative(&self.inner)
    }

    /// Whether the path names an existing directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        Self::engine().is_directory(&self.inner)
    }

    /// Whether the path ends in a separator.
    #[must_use]
    pub fn has_trailing_separator(&self) -> bool {
        Self::engine().has_trailing_separator(&self.inner)
    }

    /// Lexical join (see [`PathEngine::plus`]).
    #[must_use]
    pub fn join(&self, other: &str) -> FsPath {
        self.plus(other)
    }

    /// Lexical cleanup; see [`PathEngine::cleanpath_aggressive`].
    #[must_use]
    pub fn cleanpath(&self) -> FsPath {
        FsPath::new(Self::engine().cleanpath_aggressive(&self.inner))
    }

    /// Full paths of the directory's entries.
    ///
    /// # Errors
    ///
    /// See [`PathEngine::children`].
    pub fn children(&self, include_hidden: bool) -> Result<Vec<String>> {
        let options = ChildrenOptions::new().include_hidden(include_hidden);
        Self::engine().children(&self.inner, options)?.collect()
    }

    /// Entries of the directory as path values.
    ///
    /// # Errors
    ///
    /// See [`PathEngine::children`].
    pub fn children_paths(&self, include_hidden: bool) -> Result<Vec<FsPath>> {
        self.children(include_hidden)
            .map(|entries| entries.into_iter().map(FsPath::from).collect())
    }

    /// Bare entry names including `.` and `..`.
    ///
    /// # Errors
    ///
    /// See [`PathEngine::entries`].
    pub fn entries(&self) -> Result<Vec<String>> {
        Self::engine().entries(&self.inner)
    }

    // Shared by `join` and the `Add` impls.
    fn plus(&self, other: &str) -> FsPath {
        FsPath::new(Self::engine().plus(&self.inner, other))
    }
}

impl fmt::Display for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<&str> for FsPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FsPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<FsPath> for String {
    fn from(path: FsPath) -> Self {
        path.inner
    }
}

impl AsRef<str> for FsPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsPathString for FsPath {
    fn as_path_str(&self) -> Result<&str> {
        Ok(&self.inner)
    }
}

impl Add<&str> for FsPath {
    type Output = FsPath;

    fn add(self, other: &str) -> FsPath {
        self.plus(other)
    }
}

impl Add<&str> for &FsPath {
    type Output = FsPath;

    fn add(self, other: &str) -> FsPath {
        self.plus(other)
    }
}

impl Add<&FsPath> for &FsPath {
    type Output = FsPath;

    fn add(self, other: &FsPath) -> FsPath {
        self.plus(other.as_str())
    }
}
