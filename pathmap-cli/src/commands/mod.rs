//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `remap`: Remap paths between platforms using a platform table
//! - `replace`: Remap paths using an ordered root table
//! - `normalize`: Print normalized paths
//! - `detect`: Print the detected style of each path
//! - `validate`: Validate configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod detect;
pub mod normalize;
pub mod remap;
pub mod replace;
pub mod validate;

pub use completions::CompletionsCommand;
pub use detect::DetectCommand;
pub use normalize::NormalizeCommand;
pub use remap::RemapCommand;
pub use replace::ReplaceCommand;
pub use validate::ValidateCommand;
