//! Directory enumeration.
//!
//! This is the only part of the engine that performs I/O. Entries are
//! yielded in the order the operating system's `read_dir` returns them,
//! which is unsorted and may differ between runs and filesystems.

use std::fs::{self, ReadDir};
use std::path::Path;

use crate::error::{Error, Result};
use crate::path::engine::PathEngine;

/// Options for [`PathEngine::children`].
///
/// # Examples
///
/// ```
/// use fastpath::path::ChildrenOptions;
///
/// let options = ChildrenOptions::new()
///     .include_hidden(false)
///     .with_directory(false);
/// assert!(!options.includes_hidden());
/// assert!(!options.prefixes_directory());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildrenOptions {
    include_hidden: bool,
    with_directory: bool,
}

impl Default for ChildrenOptions {
    fn default() -> Self {
        Self {
            include_hidden: true,
            with_directory: true,
        }
    }
}

impl ChildrenOptions {
    /// Options that list every entry as a full path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure whether entries whose name starts with `.` are listed.
    #[must_use]
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Configure whether entries are joined onto the listed directory or
    /// yielded as bare names.
    #[must_use]
    pub fn with_directory(mut self, with_directory: bool) -> Self {
        self.with_directory = with_directory;
        self
    }

    /// Whether hidden entries are listed.
    #[must_use]
    pub fn includes_hidden(&self) -> bool {
        self.include_hidden
    }

    /// Whether entries are joined onto the listed directory.
    #[must_use]
    pub fn prefixes_directory(&self) -> bool {
        self.with_directory
    }
}

/// Iterator over the entries of one directory.
///
/// Created by [`PathEngine::children`]. It cannot be restarted; list the
/// directory again for a fresh pass.
#[derive(Debug)]
pub struct Children {
    engine: PathEngine,
    base: String,
    entries: ReadDir,
    options: ChildrenOptions,
}

impl Children {
    /// The directory being listed, as given.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    fn entry_name(&self, entry: &fs::DirEntry) -> Result<String> {
        entry.file_name().into_string().map_err(|raw| Error::TypeMismatch {
            type_name: "OsString",
            reason: format!(
                "entry {} in {} is not valid UTF-8",
                raw.to_string_lossy(),
                self.base
            ),
        })
    }
}

impl Iterator for Children {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(Error::from_io(&self.base, e))),
            };
            let name = match self.entry_name(&entry) {
                Ok(name) => name,
                Err(e) => return Some(Err(e)),
            };
            if name == "." || name == ".." {
                continue;
            }
            if !self.options.include_hidden && name.starts_with('.') {
                continue;
            }
            if !self.options.with_directory {
                return Some(Ok(name));
            }
            return Some(Ok(self.engine.join_entry(&self.base, &name)));
        }
    }
}

impl PathEngine {
    /// `base`, one separator, then `name`. Only the exact base `.` is dropped;
    /// `.` and `..` segments inside `base` are kept as written.
    pub(super) fn join_entry(&self, base: &str, name: &str) -> String {
        if base == "." {
            return name.to_string();
        }
        let base = self.del_trailing_separator(base);
        if self.has_trailing_separator(base) || self.basename(base, "").is_empty() {
            // Root or bare drive prefix
            format!("{base}{name}")
        } else {
            format!("{base}{}{name}", self.style().primary())
        }
    }

    /// List the direct entries of the directory `path`, excluding `.` and `..`.
    ///
    /// With [`ChildrenOptions::with_directory`] set (the default) each entry
    /// is `path`, one separator and the name, with no lexical cleanup: listing
    /// `/` yields `/name`, `./` yields `./name` and `a/.` yields `a/./name`.
    /// Only listing exactly `.` yields bare names.
    ///
    /// # Errors
    ///
    /// Opening the directory fails with:
    /// - [`Error::PathNotFound`] if `path` is missing or not a directory
    /// - [`Error::PermissionDenied`] if it cannot be read
    /// - [`Error::Io`] for any other I/O failure
    ///
    /// Individual entries can still fail with [`Error::Io`], or with
    /// [`Error::TypeMismatch`] when their name is not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fastpath::path::{ChildrenOptions, PathEngine};
    ///
    /// let engine = PathEngine::current();
    /// for entry in engine.children("/etc", ChildrenOptions::new()).unwrap() {
    ///     println!("{}", entry.unwrap());
    /// }
    /// ```
    pub fn children(&self, path: &str, options: ChildrenOptions) -> Result<Children> {
        log::debug!("listing children of {path}");
        let entries = fs::read_dir(path).map_err(|e| {
            if Path::new(path).exists() && !Path::new(path).is_dir() {
                Error::PathNotFound { path: path.into() }
            } else {
                Error::from_io(path, e)
            }
        })?;
        Ok(Children {
            engine: *self,
            base: path.to_string(),
            entries,
            options,
        })
    }

    /// Bare names of every entry in `path`, starting with `.` and `..`.
    ///
    /// # Errors
    ///
    /// Same as [`PathEngine::children`]; the first failing entry aborts the
    /// listing.
    pub fn entries(&self, path: &str) -> Result<Vec<String>> {
        let options = ChildrenOptions::new().with_directory(false);
        let mut names = vec![".".to_string(), "..".to_string()];
        for name in self.children(path, options)? {
            names.push(name?);
        }
        log::trace!("{} entries in {path}", names.len());
        Ok(names)
    }
}
