//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Loads configuration files from disk.
///
/// # Examples
///
/// ```no_run
/// use fastpath::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_file(Path::new("fastpath.yaml")).unwrap();
/// println!("style: {:?}", config.style);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] or [`Error::PermissionDenied`] if the
    /// file cannot be read, and [`Error::Configuration`] if its YAML is
    /// invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        log::debug!("loading configuration from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
        Config::from_yaml_str(&contents)
    }

    /// Load `path` if it exists, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::load_file`] for a file that exists.
    pub fn load_optional(path: &Path) -> Result<Option<Config>> {
        if !path.exists() {
            log::trace!("no configuration at {}", path.display());
            return Ok(None);
        }
        Self::load_file(path).map(Some)
    }
}
