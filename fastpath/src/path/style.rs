//! Separator styles and root prefixes.
//!
//! A [`SeparatorStyle`] decides which characters split path segments and
//! whether drive-letter (`C:`) and UNC (`\\server\share`) prefixes are
//! recognized. The process-wide style is fixed once, either derived from the
//! host platform on first use or installed explicitly at startup.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static CURRENT: OnceLock<SeparatorStyle> = OnceLock::new();

/// Separator configuration used by every parsing operation.
///
/// # Examples
///
/// ```
/// use fastpath::path::SeparatorStyle;
///
/// let posix = SeparatorStyle::POSIX;
/// assert!(posix.is_separator(b'/'));
/// assert!(!posix.is_separator(b'\\'));
///
/// let windows = SeparatorStyle::WINDOWS;
/// assert!(windows.is_separator(b'\\'));
/// assert!(windows.is_separator(b'/'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeparatorStyle {
    name: &'static str,
    primary: char,
    alternate: Option<char>,
    drive_prefixes: bool,
}

/// Kind of root prefix found in front of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixKind {
    /// No prefix.
    None,
    /// Drive letter, e.g. `C:`.
    Drive,
    /// UNC share, e.g. `\\server\share`.
    Unc,
}

/// A root prefix: its kind and its byte length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    /// The prefix kind.
    pub kind: PrefixKind,
    /// Number of leading bytes the prefix occupies.
    pub len: usize,
}

impl Prefix {
    const NONE: Self = Self {
        kind: PrefixKind::None,
        len: 0,
    };
}

impl SeparatorStyle {
    /// Single `/` separator, no prefixes.
    pub const POSIX: Self = Self {
        name: "posix",
        primary: '/',
        alternate: None,
        drive_prefixes: false,
    };

    /// `\` separator with `/` as alternate, drive and UNC prefixes.
    pub const WINDOWS: Self = Self {
        name: "windows",
        primary: '\\',
        alternate: Some('/'),
        drive_prefixes: true,
    };

    /// The style native to the platform this crate was compiled for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::WINDOWS
        } else {
            Self::POSIX
        }
    }

    /// The process-wide style, fixed to [`SeparatorStyle::host`] on first use
    /// unless [`SeparatorStyle::install`] ran earlier.
    pub fn current() -> Self {
        *CURRENT.get_or_init(Self::host)
    }

    /// Fix the process-wide style. Must run before any other engine call.
    ///
    /// Installing the style already in effect is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StyleAlreadyInstalled`] if a different style is
    /// already fixed.
    pub fn install(style: Self) -> Result<()> {
        let current = *CURRENT.get_or_init(|| style);
        if current == style {
            log::debug!("separator style fixed as {}", style.name);
            Ok(())
        } else {
            Err(Error::StyleAlreadyInstalled {
                current: current.name,
            })
        }
    }

    /// Short name of the style (`posix` or `windows`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The separator written when the engine inserts one.
    #[must_use]
    pub const fn primary(&self) -> char {
        self.primary
    }

    /// The second recognized separator, if any.
    #[must_use]
    pub const fn alternate(&self) -> Option<char> {
        self.alternate
    }

    /// Whether drive and UNC prefixes are recognized.
    #[must_use]
    pub const fn drive_prefixes(&self) -> bool {
        self.drive_prefixes
    }

    /// Check whether a byte is one of this style's separators.
    ///
    /// Separators are ASCII, so byte positions they occupy are always char
    /// boundaries.
    #[must_use]
    pub fn is_separator(&self, byte: u8) -> bool {
        byte == self.primary as u8 || self.alternate.is_some_and(|alt| byte == alt as u8)
    }

    /// Locate the root prefix of `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::path::{PrefixKind, SeparatorStyle};
    ///
    /// let prefix = SeparatorStyle::WINDOWS.prefix(r"C:\Users");
    /// assert_eq!(prefix.kind, PrefixKind::Drive);
    /// assert_eq!(prefix.len, 2);
    ///
    /// let unc = SeparatorStyle::WINDOWS.prefix(r"\\server\share\file");
    /// assert_eq!(unc.kind, PrefixKind::Unc);
    /// assert_eq!(unc.len, 14);
    ///
    /// assert_eq!(SeparatorStyle::POSIX.prefix("C:/x").kind, PrefixKind::None);
    /// ```
    #[must_use]
    pub fn prefix(&self, path: &str) -> Prefix {
        if !self.drive_prefixes {
            return Prefix::NONE;
        }
        let bytes = path.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            return Prefix {
                kind: PrefixKind::Drive,
                len: 2,
            };
        }
        self.unc_prefix_len(bytes).map_or(Prefix::NONE, |len| Prefix {
            kind: PrefixKind::Unc,
            len,
        })
    }

    fn unc_prefix_len(&self, bytes: &[u8]) -> Option<usize> {
        if bytes.len() < 2 || !self.is_separator(bytes[0]) || !self.is_separator(bytes[1]) {
            return None;
        }
        let server_end = self.segment_end(bytes, 2);
        if server_end == 2 || server_end == bytes.len() {
            return None;
        }
        let share_start = server_end + 1;
        let share_end = self.segment_end(bytes, share_start);
        (share_end > share_start).then_some(share_end)
    }

    fn segment_end(&self, bytes: &[u8], start: usize) -> usize {
        bytes[start..]
            .iter()
            .position(|&b| self.is_separator(b))
            .map_or(bytes.len(), |offset| start + offset)
    }
}

impl Default for SeparatorStyle {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for SeparatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Configurable name of a separator style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleName {
    /// Whatever the host platform uses.
    #[default]
    Host,
    /// Force POSIX rules.
    Posix,
    /// Force Windows rules.
    Windows,
}

impl StyleName {
    /// The concrete style this name selects.
    #[must_use]
    pub const fn resolve(self) -> SeparatorStyle {
        match self {
            Self::Host => SeparatorStyle::host(),
            Self::Posix => SeparatorStyle::POSIX,
            Self::Windows => SeparatorStyle::WINDOWS,
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => write!(f, "host"),
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for StyleName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "host" => Ok(Self::Host),
            "posix" | "unix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            _ => Err(Error::Validation {
                field: "style".to_string(),
                message: format!("unknown separator style '{s}' (expected host, posix or windows)"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_separators() {
        let style = SeparatorStyle::POSIX;
        assert!(style.is_separator(b'/'));
        assert!(!style.is_separator(b'\\'));
        assert!(!style.is_separator(b':'));
        assert_eq!(style.primary(), '/');
        assert_eq!(style.alternate(), None);
    }

    #[test]
    fn test_windows_separators() {
        let style = SeparatorStyle::WINDOWS;
        assert!(style.is_separator(b'\\'));
        assert!(style.is_separator(b'/'));
        assert!(style.drive_prefixes());
    }

    #[test]
    #[cfg(unix)]
    fn test_host_is_posix_on_unix() {
        assert_eq!(SeparatorStyle::host(), SeparatorStyle::POSIX);
        assert_eq!(SeparatorStyle::current(), SeparatorStyle::POSIX);
    }

    #[test]
    fn test_install_same_style_is_noop() {
        let current = SeparatorStyle::current();
        assert!(SeparatorStyle::install(current).is_ok());
    }

    #[test]
    fn test_install_different_style_fails() {
        let current = SeparatorStyle::current();
        let other = if current == SeparatorStyle::POSIX {
            SeparatorStyle::WINDOWS
        } else {
            SeparatorStyle::POSIX
        };
        let err = SeparatorStyle::install(other).unwrap_err();
        assert!(matches!(err, Error::StyleAlreadyInstalled { .. }));
    }

    #[test]
    fn test_drive_prefix() {
        let prefix = SeparatorStyle::WINDOWS.prefix("c:foo");
        assert_eq!(prefix.kind, PrefixKind::Drive);
        assert_eq!(prefix.len, 2);
    }

    #[test]
    fn test_unc_prefix_requires_share() {
        let style = SeparatorStyle::WINDOWS;
        assert_eq!(style.prefix(r"\\server").kind, PrefixKind::None);
        assert_eq!(style.prefix(r"\\server\").kind, PrefixKind::None);
        assert_eq!(style.prefix(r"\\\share").kind, PrefixKind::None);

        let unc = style.prefix("//server/share");
        assert_eq!(unc.kind, PrefixKind::Unc);
        assert_eq!(unc.len, "//server/share".len());
    }

    #[test]
    fn test_no_prefix_for_plain_paths() {
        let style = SeparatorStyle::WINDOWS;
        assert_eq!(style.prefix(r"\foo").kind, PrefixKind::None);
        assert_eq!(style.prefix("foo").kind, PrefixKind::None);
        assert_eq!(style.prefix("").kind, PrefixKind::None);
        assert_eq!(style.prefix("1:").kind, PrefixKind::None);
    }

    #[test]
    fn test_style_name_parse() {
        assert_eq!("posix".parse::<StyleName>().unwrap(), StyleName::Posix);
        assert_eq!("Windows".parse::<StyleName>().unwrap(), StyleName::Windows);
        assert_eq!("host".parse::<StyleName>().unwrap(), StyleName::Host);
        assert!("amiga".parse::<StyleName>().is_err());
    }

    #[test]
    fn test_style_name_resolve() {
        assert_eq!(StyleName::Posix.resolve(), SeparatorStyle::POSIX);
        assert_eq!(StyleName::Windows.resolve(), SeparatorStyle::WINDOWS);
        assert_eq!(StyleName::Host.resolve(), SeparatorStyle::host());
    }
}
