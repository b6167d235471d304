//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::{ChildrenOptions, SeparatorStyle, StyleName};

/// Engine configuration.
///
/// Every field is optional so that partial configurations from several
/// sources can be merged; unset fields fall back to the engine defaults.
///
/// # Examples
///
/// ```
/// use fastpath::config::Config;
/// use fastpath::path::{SeparatorStyle, StyleName};
///
/// let config = Config {
///     style: Some(StyleName::Windows),
///     include_hidden: Some(false),
///     ..Default::default()
/// };
/// assert_eq!(config.separator_style(), SeparatorStyle::WINDOWS);
/// assert!(!config.children_options().includes_hidden());
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Separator style to install at startup.
    pub style: Option<StyleName>,

    /// List entries whose name starts with `.` when enumerating children.
    pub include_hidden: Option<bool>,

    /// Join listed entries onto the directory instead of yielding bare names.
    pub with_directory: Option<bool>,
}

impl Config {
    /// Parse a configuration from YAML text.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Configuration`] if the YAML is malformed or
    /// names an unknown field.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastpath::config::Config;
    /// use fastpath::path::StyleName;
    ///
    /// let config = Config::from_yaml_str("style: posix\ninclude_hidden: false\n").unwrap();
    /// assert_eq!(config.style, Some(StyleName::Posix));
    /// assert!(Config::from_yaml_str("colour: blue\n").is_err());
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// The concrete separator style selected, host style when unset.
    #[must_use]
    pub fn separator_style(&self) -> SeparatorStyle {
        self.style.unwrap_or_default().resolve()
    }

    /// Directory listing options derived from this configuration.
    #[must_use]
    pub fn children_options(&self) -> ChildrenOptions {
        let defaults = ChildrenOptions::default();
        ChildrenOptions::new()
            .include_hidden(self.include_hidden.unwrap_or(defaults.includes_hidden()))
            .with_directory(self.with_directory.unwrap_or(defaults.prefixes_directory()))
    }
}
