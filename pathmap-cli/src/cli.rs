//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, DetectCommand, NormalizeCommand, RemapCommand, ReplaceCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for remapping file-system paths between machines.
#[derive(Parser)]
#[command(name = "pathmap")]
#[command(
    version,
    about = "Remap file-system paths between operating-system mount layouts",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load an additional configuration file with the highest file precedence
    #[arg(long, value_name = "PATH", global = true, env = "PATHMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "PATHMAP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Remap paths to another platform's mount points
    Remap(RemapCommand),

    /// Replace source roots with destination roots
    Replace(ReplaceCommand),

    /// Print paths with repeated separators and back-references collapsed
    Normalize(NormalizeCommand),

    /// Print the detected path style of each path
    Detect(DetectCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
