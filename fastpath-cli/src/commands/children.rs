//! Directory listing commands: `children` and `entries`.

use std::ffi::OsString;

use clap::Args;
use fastpath::path::PathEngine;
use fastpath::AsPathString;

use crate::error::CliError;
use crate::utils::{prepare_engine, print_list, GlobalOptions, OutputFormat};

/// List the entries of a directory, excluding `.` and `..`.
#[derive(Args)]
pub struct ChildrenCommand {
    /// Directory to list
    #[arg(value_name = "DIR", default_value = ".")]
    pub path: OsString,

    /// List entries whose name starts with a dot
    #[arg(long, conflicts_with = "exclude_hidden")]
    pub include_hidden: bool,

    /// Skip entries whose name starts with a dot
    #[arg(long)]
    pub exclude_hidden: bool,

    /// Print bare entry names instead of joining them onto DIR
    #[arg(long)]
    pub bare: bool,

    /// Sort the output (listing order is otherwise the filesystem's)
    #[arg(long)]
    pub sort: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl ChildrenCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = prepare_engine(global)?;

        let mut options = config.children_options();
        if self.include_hidden {
            options = options.include_hidden(true);
        }
        if self.exclude_hidden {
            options = options.include_hidden(false);
        }
        if self.bare {
            options = options.with_directory(false);
        }

        let mut listed = PathEngine::current()
            .children(self.path.as_path_str()?, options)?
            .collect::<fastpath::Result<Vec<_>>>()?;
        if self.sort {
            listed.sort();
        }
        print_list(&listed, self.format)
    }
}

/// List every entry name of a directory, `.` and `..` first.
#[derive(Args)]
pub struct EntriesCommand {
    /// Directory to list
    #[arg(value_name = "DIR", default_value = ".")]
    pub path: OsString,

    /// Sort the names after `.` and `..`
    #[arg(long)]
    pub sort: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl EntriesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        prepare_engine(global)?;
        let mut entries = fastpath::entries(&self.path)?;
        if self.sort {
            entries[2..].sort();
        }
        print_list(&entries, self.format)
    }
}
