//! Library exports for pathmap-cli.
//!
//! This module exports the CLI structure so the command tree can be
//! inspected outside the binary, for example to render documentation.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
