//! Utility functions for CLI operations.
//!
//! This module provides the pieces every command shares: global options,
//! configuration loading, separator style installation and output
//! formatting.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::ValueEnum;
use fastpath::config::Config;
use fastpath::path::StyleName;
use fastpath::{ConfigBuilder, SeparatorStyle};
use serde::Serialize;

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Configuration file to load.
    pub config: Option<PathBuf>,

    /// Separator style overriding every other source.
    pub style: Option<StyleName>,
}

/// Output format for commands producing structured results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Load configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(path) = &global.config {
        builder = builder.with_file(path);
    }
    if let Some(style) = global.style {
        builder = builder.with_config(Config {
            style: Some(style),
            ..Default::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Load configuration and fix the process-wide separator style from it.
pub fn prepare_engine(global: &GlobalOptions) -> Result<Config, CliError> {
    let config = load_configuration(global)?;
    let style = config.separator_style();
    SeparatorStyle::install(style)?;
    log::debug!("using {style} separator rules");
    Ok(config)
}

/// Parse a separator style name for clap.
pub fn parse_style(value: &str) -> Result<StyleName, String> {
    value.parse().map_err(|e: fastpath::Error| e.to_string())
}

/// Write one value per line.
pub fn write_lines<W: Write, S: AsRef<str>>(out: &mut W, values: &[S]) -> io::Result<()> {
    for value in values {
        writeln!(out, "{}", value.as_ref())?;
    }
    Ok(())
}

/// Print a list of values in the requested format.
pub fn print_list<S: AsRef<str> + Serialize>(
    values: &[S],
    format: OutputFormat,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => write_lines(&mut out, values)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, values)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Display form of a raw argument for messages.
pub fn display_arg(arg: &OsString) -> String {
    arg.to_string_lossy().into_owned()
}
