//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and maps every failure onto the exit
//! code scripts can branch on.

use std::fmt;

use fastpath::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// A predicate command evaluated to false; its answer is already printed.
    PredicateFalse,

    /// Semantic failure (e.g. a path without a final segment).
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Predicate false or semantic failure
    /// - 2: Path not found or not a directory
    /// - 3: Permission denied
    /// - 4: A path argument that is not valid UTF-8
    /// - 5: I/O error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::PredicateFalse | CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::PathNotFound { .. } => 2,
                LibError::PermissionDenied { .. } => 3,
                LibError::TypeMismatch { .. } => 4,
                LibError::Io(_) => 5,
                LibError::Configuration(_)
                | LibError::Validation { .. }
                | LibError::StyleAlreadyInstalled { .. } => 7,
            },
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }

    /// Whether `main` should print this error to stderr.
    pub fn is_silent(&self) -> bool {
        matches!(self, CliError::PredicateFalse)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::PredicateFalse => write!(f, "false"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(e.into())
    }
}
