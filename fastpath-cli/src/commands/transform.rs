//! Commands rewriting path strings: `add-trailing-separator`,
//! `del-trailing-separator`, `cleanpath` and `plus`.

use std::ffi::OsString;

use clap::Args;
use fastpath::AsPathString;

use crate::error::CliError;
use crate::utils::{prepare_engine, print_list, GlobalOptions, OutputFormat};

/// A per-path rewrite applied by [`TransformCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Append one separator unless present.
    AddTrailingSeparator,
    /// Remove the trailing separator run, keeping roots.
    DelTrailingSeparator,
    /// Lexically resolve `.` and `..` segments.
    Cleanpath,
}

impl Transform {
    fn apply(self, path: &OsString) -> fastpath::Result<String> {
        match self {
            Transform::AddTrailingSeparator => fastpath::add_trailing_separator(path),
            Transform::DelTrailingSeparator => fastpath::del_trailing_separator(path),
            Transform::Cleanpath => fastpath::cleanpath_aggressive(path),
        }
    }
}

/// Rewrite each path and print the results.
#[derive(Args)]
pub struct TransformCommand {
    /// Paths to rewrite
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<OsString>,
}

impl TransformCommand {
    pub fn execute(self, transform: Transform, global: &GlobalOptions) -> Result<(), CliError> {
        prepare_engine(global)?;
        let rewritten = self
            .paths
            .iter()
            .map(|path| transform.apply(path))
            .collect::<fastpath::Result<Vec<_>>>()?;
        print_list(&rewritten, OutputFormat::Text)
    }
}

/// Join paths lexically, left to right.
#[derive(Args)]
pub struct PlusCommand {
    /// Base path
    #[arg(value_name = "BASE")]
    pub base: OsString,

    /// Paths joined onto the base in order
    #[arg(value_name = "PATH", required = true)]
    pub others: Vec<OsString>,
}

impl PlusCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        prepare_engine(global)?;
        let mut joined = self.base.as_path_str()?.to_string();
        for other in &self.others {
            joined = fastpath::plus(&joined, other)?;
        }
        println!("{joined}");
        Ok(())
    }
}
