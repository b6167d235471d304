//! Builder assembling a [`Config`] from every source.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds the effective configuration.
///
/// Sources are merged from lowest to highest precedence: the configuration
/// file, then `FASTPATH_*` environment variables, then the programmatic
/// override.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    require_file: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder with no file and environment overrides enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` as the configuration file. A missing file is an error.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self.require_file = true;
        self
    }

    /// Read `path` as the configuration file if it exists.
    #[must_use]
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self.require_file = false;
        self
    }

    /// Ignore `FASTPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge all sources into the effective configuration.
    ///
    /// # Errors
    ///
    /// Fails if the configuration file cannot be read or parsed, or an
    /// environment variable holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(path) = &self.file {
            let loaded = if self.require_file {
                Some(ConfigLoader::load_file(path)?)
            } else {
                ConfigLoader::load_optional(path)?
            };
            if let Some(loaded) = loaded {
                ConfigMerger::merge_into(&mut config, &loaded);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        log::debug!("effective configuration: {config:?}");
        Ok(config)
    }
}
