//! The style-bound path engine.
//!
//! [`PathEngine`] carries a [`SeparatorStyle`] and exposes every lexical
//! operation as a method on `&str`, borrowing from its input wherever a slice
//! is enough. The operations themselves live in the sibling modules
//! (`components`, `classify`, `trailing`, `join`, `children`), each adding an
//! `impl PathEngine` block.

use crate::path::style::SeparatorStyle;

/// Lexical path engine bound to one separator style.
///
/// # Examples
///
/// ```
/// use fastpath::path::{PathEngine, SeparatorStyle};
///
/// let engine = PathEngine::new(SeparatorStyle::POSIX);
/// assert_eq!(engine.basename("/usr/lib", ""), "lib");
/// assert_eq!(engine.dirname("/usr/lib/"), "/usr");
///
/// let windows = PathEngine::new(SeparatorStyle::WINDOWS);
/// assert!(windows.is_absolute(r"C:\Windows"));
/// assert!(!windows.is_absolute("C:Windows"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PathEngine {
    style: SeparatorStyle,
}

impl PathEngine {
    /// Create an engine for an explicit style.
    #[must_use]
    pub const fn new(style: SeparatorStyle) -> Self {
        Self { style }
    }

    /// Engine bound to the process-wide style.
    #[must_use]
    pub fn current() -> Self {
        Self::new(SeparatorStyle::current())
    }

    /// The style this engine parses with.
    #[must_use]
    pub const fn style(&self) -> SeparatorStyle {
        self.style
    }

    pub(crate) fn is_sep(&self, byte: u8) -> bool {
        self.style.is_separator(byte)
    }

    /// Index just past the last non-separator byte of `bytes[floor..end]`,
    /// or `floor` if that range holds only separators.
    pub(crate) fn trim_separators_back(&self, bytes: &[u8], floor: usize, end: usize) -> usize {
        let mut end = end;
        while end > floor && self.is_sep(bytes[end - 1]) {
            end -= 1;
        }
        end
    }

    /// The first separator following the root prefix, as a one-byte slice.
    pub(crate) fn root_separator<'a>(&self, path: &'a str) -> Option<&'a str> {
        let floor = self.style.prefix(path).len;
        path.as_bytes()[floor..]
            .iter()
            .position(|&b| self.is_sep(b))
            .map(|offset| &path[floor + offset..=floor + offset])
    }
}
