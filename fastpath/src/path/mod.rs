//! Lexical path-string parsing and directory enumeration.
//!
//! Everything here works on `&str` values and never consults the filesystem,
//! with two exceptions: [`PathEngine::is_directory`] and the directory
//! listing in [`PathEngine::children`].
//!
//! # Key Concepts
//!
//! ## Separator style
//!
//! A [`SeparatorStyle`] decides which bytes are separators and whether drive
//! (`C:`) and UNC (`\\server\share`) prefixes are recognized. The
//! process-wide style is fixed once, derived from the host unless
//! [`SeparatorStyle::install`] runs first at startup.
//!
//! ## Engine
//!
//! [`PathEngine`] binds a style to the operations. Its methods borrow from
//! their input wherever a slice of it is the answer:
//!
//! - splitting: [`PathEngine::chop_basename`], [`PathEngine::basename`],
//!   [`PathEngine::extname`], [`PathEngine::dirname`]
//! - classification: [`PathEngine::is_absolute`], [`PathEngine::is_relative`]
//! - trailing separators: [`PathEngine::has_trailing_separator`],
//!   [`PathEngine::add_trailing_separator`],
//!   [`PathEngine::del_trailing_separator`]
//! - joining: [`PathEngine::plus`], [`PathEngine::cleanpath_aggressive`]
//!
//! ## Coercion
//!
//! The free functions re-exported at the crate root accept anything
//! implementing [`AsPathString`] and return owned values. [`FsPath`] is the
//! owned path type carrying the same operations as methods.
//!
//! # Examples
//!
//! ```
//! use fastpath::path::{PathEngine, SeparatorStyle};
//!
//! let posix = PathEngine::new(SeparatorStyle::POSIX);
//! assert_eq!(posix.dirname("/usr/lib/"), "/usr");
//! assert_eq!(posix.plus("/usr/lib", "../bin"), "/usr/bin");
//!
//! let windows = PathEngine::new(SeparatorStyle::WINDOWS);
//! assert_eq!(windows.basename(r"C:\Users\me\notes.txt", ".*"), "notes");
//! assert!(windows.is_absolute(r"\\server\share\file"));
//! ```

mod children;
mod classify;
mod components;
mod convert;
mod engine;
pub(crate) mod functions;
mod join;
mod style;
mod trailing;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use children::{Children, ChildrenOptions};
pub use components::{PathComponents, ANY_EXTENSION};
pub use convert::AsPathString;
pub use engine::PathEngine;
pub use style::{Prefix, PrefixKind, SeparatorStyle, StyleName};
pub use types::FsPath;
