//! Configuration merging.

use crate::config::schema::Config;

/// Merges configurations according to precedence.
///
/// # Examples
///
/// ```
/// use fastpath::config::{Config, ConfigMerger};
///
/// let low = Config { include_hidden: Some(true), ..Default::default() };
/// let high = Config { include_hidden: Some(false), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.include_hidden, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configurations given from lowest to highest precedence.
    #[must_use]
    pub fn merge<I: IntoIterator<Item = Config>>(sources: I) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.style.is_some() {
            target.style = source.style;
        }
        if source.include_hidden.is_some() {
            target.include_hidden = source.include_hidden;
        }
        if source.with_directory.is_some() {
            target.with_directory = source.with_directory;
        }
    }
}
