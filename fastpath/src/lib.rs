#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fastpath
//!
//! A fast, lexical, cross-platform path-string engine.
//!
//! Paths are plain strings. Splitting, classification, trailing-separator
//! handling and joining never touch the filesystem; only directory checks and
//! listings do.
//!
//! ## Core Types
//!
//! - [`PathEngine`]: every operation, bound to one [`SeparatorStyle`]
//! - [`FsPath`]: an owned path value with the operations as methods
//! - [`AsPathString`]: coercion of caller values into path strings
//! - [`Error`] and [`Result`]: error handling types
//! - [`Config`] and [`ConfigBuilder`]: style and listing configuration
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use std::path::Path;
//!
//! assert_eq!(fastpath::basename("/usr/lib", "").unwrap(), "lib");
//! assert_eq!(fastpath::extname(Path::new("archive.tar.gz")).unwrap(), ".gz");
//! assert_eq!(fastpath::dirname("/usr/lib/").unwrap(), "/usr");
//! assert!(fastpath::is_absolute("/etc").unwrap());
//! assert_eq!(fastpath::plus("/usr/lib", "../bin").unwrap(), "/usr/bin");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::functions::{
    add_trailing_separator, basename, children, children_paths, chop_basename,
    cleanpath_aggressive, del_trailing_separator, dirname, entries, extname,
    has_trailing_separator, is_absolute, is_directory, is_relative, plus,
};
pub use path::{AsPathString, FsPath, PathEngine, SeparatorStyle};
