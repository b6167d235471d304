//! Environment variable overrides.
//!
//! `FASTPATH_*` variables override values read from configuration files.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Separator style override: `host`, `posix` or `windows`.
pub const STYLE_ENV: &str = "FASTPATH_STYLE";

/// Hidden-entry override for directory listings (boolean).
pub const INCLUDE_HIDDEN_ENV: &str = "FASTPATH_INCLUDE_HIDDEN";

/// Applies environment variable overrides to a configuration.
///
/// # Examples
///
/// ```no_run
/// use fastpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply every set `FASTPATH_*` variable to `config`.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a variable holds an unrecognized value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(style) = Self::var(STYLE_ENV) {
            config.style = Some(style.parse().map_err(|_| Error::Validation {
                field: STYLE_ENV.into(),
                message: format!("Invalid separator style: '{style}' (expected host/posix/windows)"),
            })?);
        }

        if let Some(val) = Self::var(INCLUDE_HIDDEN_ENV) {
            config.include_hidden = Some(Self::parse_bool(INCLUDE_HIDDEN_ENV, &val)?);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
