//! Predicate commands: `absolute`, `relative`, `directory` and
//! `has-trailing-separator`.
//!
//! Each prints `true` or `false` and exits 0 or 1 accordingly.

use std::ffi::OsString;

use clap::Args;

use crate::error::CliError;
use crate::utils::{prepare_engine, GlobalOptions};

/// The question a [`PredicateCommand`] answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// The path is anchored at a root.
    Absolute,
    /// The path resolves against the current directory.
    Relative,
    /// The path names an existing directory.
    Directory,
    /// The path ends in a separator.
    TrailingSeparator,
}

impl Predicate {
    fn evaluate(self, path: &OsString) -> fastpath::Result<bool> {
        match self {
            Predicate::Absolute => fastpath::is_absolute(path),
            Predicate::Relative => fastpath::is_relative(path),
            Predicate::Directory => fastpath::is_directory(path),
            Predicate::TrailingSeparator => fastpath::has_trailing_separator(path),
        }
    }
}

/// Check a property of a path.
#[derive(Args)]
pub struct PredicateCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: OsString,

    /// Invert the answer
    #[arg(long)]
    pub not: bool,
}

impl PredicateCommand {
    pub fn execute(self, predicate: Predicate, global: &GlobalOptions) -> Result<(), CliError> {
        prepare_engine(global)?;
        let answer = predicate.evaluate(&self.path)? != self.not;
        log::debug!("{predicate:?} (not: {}) -> {answer}", self.not);
        println!("{answer}");
        if answer {
            Ok(())
        } else {
            Err(CliError::PredicateFalse)
        }
    }
}
