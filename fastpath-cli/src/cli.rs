//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fastpath::path::StyleName;

use crate::commands::{
    BasenameCommand, ChildrenCommand, ChopBasenameCommand, CompletionsCommand, DirnameCommand,
    EntriesCommand, ExtnameCommand, PlusCommand, PredicateCommand, TransformCommand,
};
use crate::utils::parse_style;

/// Fast, lexical path-string operations from the command line.
#[derive(Parser)]
#[command(name = "fastpath")]
#[command(version, about = "Fast, lexical path-string operations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load configuration from a YAML file
    #[arg(long, value_name = "PATH", global = true, env = "FASTPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Separator rules: host, posix or windows
    #[arg(
        long,
        value_name = "STYLE",
        global = true,
        env = "FASTPATH_STYLE",
        value_parser = parse_style
    )]
    pub style: Option<StyleName>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the final segment of each path
    Basename(BasenameCommand),

    /// Print the extension of each path
    Extname(ExtnameCommand),

    /// Print the directory part of each path
    Dirname(DirnameCommand),

    /// Split a path before its final segment
    ChopBasename(ChopBasenameCommand),

    /// Check whether a path is absolute
    Absolute(PredicateCommand),

    /// Check whether a path is relative
    Relative(PredicateCommand),

    /// Check whether a path is an existing directory
    Directory(PredicateCommand),

    /// Check whether a path ends in a separator
    HasTrailingSeparator(PredicateCommand),

    /// Append a trailing separator to each path
    AddTrailingSeparator(TransformCommand),

    /// Remove the trailing separators of each path
    DelTrailingSeparator(TransformCommand),

    /// Join paths lexically
    Plus(PlusCommand),

    /// Resolve `.` and `..` segments lexically
    Cleanpath(TransformCommand),

    /// List the entries of a directory
    Children(ChildrenCommand),

    /// List every entry name of a directory, `.` and `..` included
    Entries(EntriesCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
