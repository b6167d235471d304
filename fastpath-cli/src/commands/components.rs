//! Path splitting commands: `basename`, `extname`, `dirname` and
//! `chop-basename`.

use std::ffi::OsString;

use clap::Args;
use serde::Serialize;

use crate::error::CliError;
use crate::utils::{display_arg, prepare_engine, print_list, GlobalOptions, OutputFormat};

/// Print the final segment of each path.
#[derive(Args)]
pub struct BasenameCommand {
    /// Paths to split
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<OsString>,

    /// Extension to strip: `.*` strips any, a literal strips only an exact match
    #[arg(short, long, value_name = "EXT", default_value = "", allow_hyphen_values = true)]
    pub strip_ext: String,
}

impl BasenameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        prepare_engine(global)?;
        let names = self
            .paths
            .iter()
            .map(|path| fastpath::basename(path, &self.strip_ext))
            .collect::<fastpath::Result<Vec<_>>>()?;
        print_list(&names, OutputFormat::Text)
    }
}

/// Print the extension of each path, leading dot included.
#[derive(Args)]
pub struct ExtnameCommand {
    /// Paths to inspect
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<OsString>,
}

impl ExtnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        prepare_engine(global)?;
        let extensions = self
            .paths
            .iter()
            .map(fastpath::extname)
            .collect::<fastpath::Result<Vec<_>>>()?;
        print_list(&extensions, OutputFormat::Text)
    }
}

/// Print everything before the final segment of each path.
#[derive(Args)]
pub struct DirnameCommand {
    /// Paths to split
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<OsString>,
}

impl DirnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        prepare_engine(global)?;
        let directories = self
            .paths
            .iter()
            .map(fastpath::dirname)
            .collect::<fastpath::Result<Vec<_>>>()?;
        print_list(&directories, OutputFormat::Text)
    }
}

/// Split a path into the text before its final segment and the segment.
#[derive(Args)]
pub struct ChopBasenameCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: OsString,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct ChopOutput {
    prefix: String,
    basename: String,
}

impl ChopBasenameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        prepare_engine(global)?;
        let Some((prefix, basename)) = fastpath::chop_basename(&self.path)? else {
            return Err(CliError::SemanticFailure(format!(
                "'{}' has no final segment",
                display_arg(&self.path)
            )));
        };
        match self.format {
            OutputFormat::Text => println!("{prefix}\t{basename}"),
            OutputFormat::Json => {
                let output = ChopOutput { prefix, basename };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Ok(())
    }
}
