//! Build script for fastpath-cli.
//!
//! Generates the `fastpath.1` man page into OUT_DIR with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! tree is declared again here in its minimal form.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("fastpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fast, lexical path-string operations")
        .long_about(
            "Split, classify, join and clean path strings under POSIX or Windows \
             separator rules, and list directory entries",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load configuration from a YAML file")
                .value_name("PATH")
                .global(true)
                .env("FASTPATH_CONFIG"),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .help("Separator rules: host, posix or windows")
                .value_name("STYLE")
                .global(true)
                .env("FASTPATH_STYLE"),
        )
        .subcommands(vec![
            Command::new("basename")
                .about("Print the final segment of each path")
                .long_about("Print the final segment of each path, optionally stripping an extension"),
            Command::new("extname").about("Print the extension of each path"),
            Command::new("dirname").about("Print the directory part of each path"),
            Command::new("chop-basename")
                .about("Split a path before its final segment")
                .long_about("Print the prefix and the final segment of a path, tab separated"),
            Command::new("absolute").about("Check whether a path is absolute"),
            Command::new("relative").about("Check whether a path is relative"),
            Command::new("directory").about("Check whether a path is an existing directory"),
            Command::new("has-trailing-separator").about("Check whether a path ends in a separator"),
            Command::new("add-trailing-separator")
                .about("Append a trailing separator to each path"),
            Command::new("del-trailing-separator")
                .about("Remove the trailing separators of each path"),
            Command::new("plus")
                .about("Join paths lexically")
                .long_about("Join paths left to right, resolving `..` against the base"),
            Command::new("cleanpath").about("Resolve `.` and `..` segments lexically"),
            Command::new("children")
                .about("List the entries of a directory")
                .long_about("List the entries of a directory, excluding `.` and `..`"),
            Command::new("entries")
                .about("List every entry name of a directory, `.` and `..` included"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("fastpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
