//! Configuration system for fastpath.
//!
//! A configuration selects the separator style installed at startup and the
//! default directory-listing options.
//!
//! # Configuration Precedence
//!
//! Sources are merged with the following precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`FASTPATH_STYLE`, `FASTPATH_INCLUDE_HIDDEN`)
//! 3. The YAML configuration file (via `ConfigBuilder::with_file`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Loading a file:
//!
//! ```no_run
//! use fastpath::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_file("fastpath.yaml")
//!     .build()
//!     .unwrap();
//! fastpath::SeparatorStyle::install(config.separator_style()).unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use fastpath::config::{Config, ConfigBuilder};
//! use fastpath::path::StyleName;
//!
//! let custom = Config {
//!     style: Some(StyleName::Posix),
//!     include_hidden: Some(false),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.style, Some(StyleName::Posix));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::{EnvironmentConfig, INCLUDE_HIDDEN_ENV, STYLE_ENV};
pub use loader::ConfigLoader;
pub use merger::ConfigMerger;
pub use schema::Config;
