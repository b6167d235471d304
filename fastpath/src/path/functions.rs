//! Free functions over any [`AsPathString`] value.
//!
//! Each function coerces its input, runs the matching [`PathEngine`] method
//! with the process-wide separator style and returns an owned result. The
//! only failure on the parsing functions is a coercion failure.

use crate::error::Result;
use crate::path::children::{Children, ChildrenOptions};
use crate::path::convert::AsPathString;
use crate::path::engine::PathEngine;
use crate::path::types::FsPath;

/// Final segment of `path`, optionally stripping an extension.
///
/// # Errors
///
/// Returns [`crate::Error::TypeMismatch`] if `path` cannot be coerced.
///
/// # Examples
///
/// ```
/// assert_eq!(fastpath::basename("/usr/lib", "").unwrap(), "lib");
/// assert_eq!(fastpath::basename("image.png", ".*").unwrap(), "image");
/// ```
pub fn basename<P: AsPathString + ?Sized>(path: &P, strip_ext: &str) -> Result<String> {
    Ok(PathEngine::current()
        .basename(path.as_path_str()?, strip_ext)
        .to_string())
}

/// Extension of the final segment, leading dot included.
///
/// # Errors
///
/// Returns [`crate::Error::TypeMismatch`] if `path` cannot be coerced.
///
/// # Examples
///
/// ```
/// assert_eq!(fastpath::extname("archive.tar.gz").unwrap(), ".gz");
/// assert_eq!(fastpath::extname(".hidden").unwrap(), "");
/// ```
pub fn extname<P: AsPathString + ?Sized>(path: &P) -> Result<String> {
    Ok(PathEngine::current()
        .extname(path.as_path_str()?)
        .to_string())
}

/// Everything before the final segment.
///
/// # Errors
///
/// Returns [`crate::Error::TypeMismatch`] if `path` cannot be coerced.
///
/// # Examples
///
/// ```
/// assert_eq!(fastpath::dirname("/usr/lib/").unwrap(), "/usr");
/// ```
pub fn dirname<P: AsPathString + ?Sized>(path: &P) -> Result<String> {
    Ok(PathEngine::current()
        .dirname(path.as_path_str()?)
        .into_owned())
}

/// Split off the final segment; `None` when there is none.
///
/// # Errors
///
/// Returns [`crate::Error::TypeMismatch`] if `path` cannot be coerced.
pub fn chop_basename<P: AsPathString + ?Sized>(path: &P) -> Result<Option<(String, String)>> {
    Ok(PathEngine::current()
        .chop_basename(path.as_path_str()?)
        .map(|(head, base)| (head.to_string(), base.to_string())))
}

/// Whether `path` is anchored at a root.
///
/// # Errors
///
/// Returns [`crate::Error::TypeMismatch`] if `path` cannot be coerced.
///
/// # Examples
///
/// ```
/// assert!(fastpath::is_absolute("/etc").unwrap());
/// assert!(!fastpath::is_absolute("etc").unwrap());
/// ```
pub fn is_absolute<P: AsPathString + ?Sized>(path: &P) -> Result<bool> {
    Ok(PathEngine::current().is_absolute(path.as_path_str()?))
}

/// Whether `path` is resolved against the current directory.
///
/// # Errors
///
/// Returns [`crate::Error::TypeMismatch`] if `path` cannot be coerced.
pub fn is_relative<P: AsPathString + ?Sized>(path: &P) -> Result<bool> {
    Ok(PathEngine::current().is_relative(path.as_path_str()?))
}

/// Whether `path` names an existing directory.
///
/// # Errors
///
/// Returns [`crate::Error::TypeMismatch`] if `path` cannot be coerced.
pub fn is_directory<P: AsPathString + ?Sized>(path: &P) -> Result<bool> {
    Ok(PathEngine::current().is_directory(path.as_path_str()?))
}

/// Whether the last character of `path` is a separator.
///
/// # Errors
///
/// Returns [`crate::Error::TypeMismatch`] if `path` cannot be coerced.
///
/// # Examples
///
/// ```
/// assert!(fastpath::has_trailing_separator("/a/b/").unwrap());
/// ```
pub fn has_trailing_separator<P: AsPathString + ?Sized>(path: &P) -> Result<bool> {
    Ok(PathEngine::current().has_trailing_separator(path.as_path_str()?))
}

/// `path` with exactly one separator appended if it had none.
///
/// # Errors
///
/// Returns [`crate::Error::TypeMismatch`] if `path` cannot be coerced.
pub fn add_trailing_separator<P: AsPathString + ?Sized>(path: &P) -> Result<String> {
    Ok(PathEngine::current()
        .add_trailing_separator(path.as_path_str()?)
        .into_owned())
}

/// `path` without its trailing separator run; roots are kept.
///
/// # Errors
///
/// Returns [`crate::Error::TypeMismatch`] if `path` cannot be coerced.
pub fn del_trailing_separator<P: AsPathString + ?Sized>(path: &P) -> Result<String> {
    Ok(PathEngine::current()
        .del_trailing_separator(path.as_path_str()?)
        .to_string())
}

/// Lexical join of `other` onto `base`.
///
/// # Errors
///
/// Returns [`crate::Error::TypeMismatch`] if either side cannot be coerced.
///
/// # Examples
///
/// ```
/// assert_eq!(fastpath::plus("/usr", "bin").unwrap(), "/usr/bin");
/// assert_eq!(fastpath::plus("/usr", "/etc").unwrap(), "/etc");
/// ```
pub fn plus<B, O>(base: &B, other: &O) -> Result<String>
where
    B: AsPathString + ?Sized,
    O: AsPathString + ?Sized,
{
    Ok(PathEngine::current()
        .plus(base.as_path_str()?, other.as_path_str()?)
        .into_owned())
}

/// Lexical removal of `.`, `..` pairs and redundant separators.
///
/// # Errors
///
/// Returns [`crate::Error::TypeMismatch`] if `path` cannot be coerced.
pub fn cleanpath_aggressive<P: AsPathString + ?Sized>(path: &P) -> Result<String> {
    Ok(PathEngine::current()
        .cleanpath_aggressive(path.as_path_str()?)
        .into_owned())
}

/// Iterate the entries of the directory `path` as full path strings.
///
/// # Errors
///
/// Fails with [`crate::Error::PathNotFound`] or
/// [`crate::Error::PermissionDenied`] when the directory cannot be opened,
/// and with [`crate::Error::TypeMismatch`] on coercion failure.
pub fn children<P: AsPathString + ?Sized>(path: &P, include_hidden: bool) -> Result<Children> {
    let options = ChildrenOptions::new().include_hidden(include_hidden);
    PathEngine::current().children(path.as_path_str()?, options)
}

/// Entries of the directory `path` as [`FsPath`] values.
///
/// # Errors
///
/// See [`children`].
pub fn children_paths<P: AsPathString + ?Sized>(
    path: &P,
    include_hidden: bool,
) -> Result<Vec<FsPath>> {
    children(path, include_hidden)?
        .map(|entry| entry.map(FsPath::from))
        .collect()
}

/// Bare names of every entry of `path`, `.` and `..` first.
///
/// # Errors
///
/// See [`children`].
pub fn entries<P: AsPathString + ?Sized>(path: &P) -> Result<Vec<String>> {
    PathEngine::current().entries(path.as_path_str()?)
}
