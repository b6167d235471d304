//! Library exports for fastpath-cli.
//!
//! This module exports the CLI structure so tooling (man pages, completion
//! generators) can inspect the command tree.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
