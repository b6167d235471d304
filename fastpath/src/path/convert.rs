//! Coercion of caller values into path strings.
//!
//! Anything that can hand out its path as a `&str` participates by
//! implementing [`AsPathString`]. Types that cannot be coerced simply do not
//! implement it; the only runtime failure left is an OS string that is not
//! valid UTF-8.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A value that can be viewed as a path string.
///
/// # Examples
///
/// ```
/// use fastpath::path::AsPathString;
/// use std::path::PathBuf;
///
/// assert_eq!("/usr/lib".as_path_str().unwrap(), "/usr/lib");
/// assert_eq!(PathBuf::from("a/b").as_path_str().unwrap(), "a/b");
/// ```
///
/// Implementing it for a caller type:
///
/// ```
/// use fastpath::path::AsPathString;
///
/// struct Asset {
///     location: String,
/// }
///
/// impl AsPathString for Asset {
///     fn as_path_str(&self) -> fastpath::Result<&str> {
///         Ok(&self.location)
///     }
/// }
///
/// let asset = Asset { location: "img/logo.png".into() };
/// assert_eq!(fastpath::extname(&asset).unwrap(), ".png");
/// ```
pub trait AsPathString {
    /// Borrow the value as a path string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value has no string form.
    fn as_path_str(&self) -> Result<&str>;
}

impl AsPathString for str {
    fn as_path_str(&self) -> Result<&str> {
        Ok(self)
    }
}

impl AsPathString for String {
    fn as_path_str(&self) -> Result<&str> {
        Ok(self.as_str())
    }
}

impl AsPathString for Cow<'_, str> {
    fn as_path_str(&self) -> Result<&str> {
        Ok(self.as_ref())
    }
}

impl AsPathString for OsStr {
    fn as_path_str(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| Error::TypeMismatch {
            type_name: "OsStr",
            reason: format!("{} is not valid UTF-8", self.to_string_lossy()),
        })
    }
}

impl AsPathString for OsString {
    fn as_path_str(&self) -> Result<&str> {
        self.as_os_str().as_path_str()
    }
}

impl AsPathString for Path {
    fn as_path_str(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| Error::TypeMismatch {
            type_name: "Path",
            reason: format!("{} is not valid UTF-8", self.display()),
        })
    }
}

impl AsPathString for PathBuf {
    fn as_path_str(&self) -> Result<&str> {
        self.as_path().as_path_str()
    }
}

impl<T: AsPathString + ?Sized> AsPathString for &T {
    fn as_path_str(&self) -> Result<&str> {
        (**self).as_path_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_and_string() {
        assert_eq!("a/b".as_path_str().unwrap(), "a/b");
        assert_eq!(String::from("a/b").as_path_str().unwrap(), "a/b");
        let cow: Cow<'_, str> = Cow::Owned("c".to_string());
        assert_eq!(cow.as_path_str().unwrap(), "c");
    }

    #[test]
    fn test_path_and_os_str() {
        assert_eq!(Path::new("/etc").as_path_str().unwrap(), "/etc");
        assert_eq!(OsString::from("x.rs").as_path_str().unwrap(), "x.rs");
    }

    #[test]
    fn test_nested_reference() {
        let s = "lib";
        let r = &&s;
        assert_eq!(r.as_path_str().unwrap(), "lib");
    }

    #[test]
    #[cfg(unix)]
    fn test_invalid_utf8_is_type_mismatch() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"bad\xff.txt");
        let err = raw.as_path_str().unwrap_err();
        assert!(err.is_type_mismatch());

        let err = Path::new(raw).as_path_str().unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { type_name: "Path", .. }));
    }
}
