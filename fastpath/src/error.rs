//! Error types for the fastpath library.
//!
//! Parsing operations never fail on a well-typed string, however degenerate.
//! The variants below cover the three remaining failure sources: a value that
//! cannot be coerced into a path string, directory enumeration hitting the
//! environment, and configuration problems.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a fastpath error.
///
/// # Examples
///
/// ```
/// use fastpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("lib".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fastpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value could not be converted into a path string.
    #[error("type mismatch: {type_name} is not path-convertible: {reason}")]
    TypeMismatch {
        /// Name of the offending input type.
        type_name: &'static str,
        /// Why the conversion failed.
        reason: String,
    },

    /// A path does not exist or is not an accessible directory.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The process-wide separator style was installed after it was already fixed.
    #[error("separator style already installed as {current}")]
    StyleAlreadyInstalled {
        /// Name of the style already in effect.
        current: &'static str,
    },
}

impl Error {
    /// Map an I/O error raised while accessing `path` onto the engine taxonomy.
    pub(crate) fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::PathNotFound { path: path.into() },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path: path.into() },
            _ => Self::Io(err),
        }
    }

    /// Check if error is a coercion failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::Error;
    ///
    /// let err = Error::TypeMismatch { type_name: "OsStr", reason: "invalid UTF-8".into() };
    /// assert!(err.is_type_mismatch());
    /// ```
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
