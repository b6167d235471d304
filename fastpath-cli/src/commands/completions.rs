//! Shell completion generation command.
//!
//! Prints a completion script for the requested shell on stdout, with
//! installation hints on stderr.

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;

const BIN_NAME: &str = "fastpath";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    fn install_hint(shell: Shell) -> Option<&'static str> {
        match shell {
            Shell::Bash => Some(
                "#   fastpath completions bash > ~/.local/share/bash-completion/completions/fastpath\n\
                 # Or source it directly in ~/.bashrc:\n\
                 #   eval \"$(fastpath completions bash)\"",
            ),
            Shell::Zsh => Some(
                "#   fastpath completions zsh > ~/.zsh/completions/_fastpath\n\
                 # Make sure ~/.zsh/completions is in your $fpath",
            ),
            Shell::Fish => Some(
                "#   fastpath completions fish > ~/.config/fish/completions/fastpath.fish",
            ),
            Shell::PowerShell => Some(
                "#   fastpath completions powershell | Out-String | Invoke-Expression",
            ),
            _ => None,
        }
    }

    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            if let Some(hint) = Self::install_hint(self.shell) {
                eprintln!("# Generating {} completion script", self.shell);
                eprintln!("# Run the following command to enable completions:");
                eprintln!("{hint}");
                eprintln!();
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
