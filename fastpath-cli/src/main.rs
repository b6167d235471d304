//! Main entry point for the fastpath CLI.
//!
//! Every lexical engine operation is a subcommand:
//! - `basename`, `extname`, `dirname`, `chop-basename`: split paths
//! - `absolute`, `relative`, `directory`, `has-trailing-separator`: predicates
//! - `plus`, `cleanpath`, `add-trailing-separator`, `del-trailing-separator`:
//!   rewrite paths
//! - `children`, `entries`: list directories

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use commands::{Predicate, Transform};
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = fastpath::init_logger(cli.verbose, cli.quiet);
    if logger.install().is_err() {
        logger.warn("a logger was already installed");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        style: cli.style,
    };

    let result = match cli.command {
        Command::Basename(cmd) => cmd.execute(&global),
        Command::Extname(cmd) => cmd.execute(&global),
        Command::Dirname(cmd) => cmd.execute(&global),
        Command::ChopBasename(cmd) => cmd.execute(&global),
        Command::Absolute(cmd) => cmd.execute(Predicate::Absolute, &global),
        Command::Relative(cmd) => cmd.execute(Predicate::Relative, &global),
        Command::Directory(cmd) => cmd.execute(Predicate::Directory, &global),
        Command::HasTrailingSeparator(cmd) => cmd.execute(Predicate::TrailingSeparator, &global),
        Command::AddTrailingSeparator(cmd) => cmd.execute(Transform::AddTrailingSeparator, &global),
        Command::DelTrailingSeparator(cmd) => cmd.execute(Transform::DelTrailingSeparator, &global),
        Command::Plus(cmd) => cmd.execute(&global),
        Command::Cleanpath(cmd) => cmd.execute(Transform::Cleanpath, &global),
        Command::Children(cmd) => cmd.execute(&global),
        Command::Entries(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !e.is_silent() {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
