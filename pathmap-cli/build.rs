//! Build script for pathmap-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathmap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Remap file-system paths between operating-system mount layouts")
        .long_about(
            "Command-line tool for rewriting file-system paths from one machine's mount \
             layout to another's, using tables of equivalent roots",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load an additional configuration file with the highest file precedence")
                .value_name("PATH")
                .global(true)
                .env("PATHMAP_CONFIG"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("PATHMAP_DATA_DIR"),
        )
        .subcommands(vec![
            Command::new("remap")
                .about("Remap paths to another platform's mount points")
                .long_about(
                    "Rewrite paths written for any platform of a platform table into the \
                     destination platform's mount points",
                ),
            Command::new("replace")
                .about("Replace source roots with destination roots")
                .long_about("Rewrite paths using an ordered table of source and destination roots"),
            Command::new("normalize")
                .about("Print paths with repeated separators and back-references collapsed")
                .long_about("Normalize paths textually without touching the file system"),
            Command::new("detect")
                .about("Print the detected path style of each path")
                .long_about("Report whether each path is read as a Windows or POSIX path"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a pathmap configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR").ok_or_else(|| std::io::Error::other("OUT_DIR is not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("pathmap.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
