//! Configuration system for pathmap.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of both mapping tables
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHMAP_*`)
//! 3. A file named with `ConfigBuilder::with_config_file`
//! 4. Private project config (`pathmap.local.yaml`)
//! 5. Project config (`pathmap.yaml`)
//! 6. User config (`~/.pathmap/config.yaml`)
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use pathmap::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! let remapper = config.uniform_remapper().unwrap();
//! println!("{:?}", remapper.remap(&["/mnt/storage1/shot.exr"]));
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use pathmap::config::{Config, ConfigBuilder};
//! use pathmap::Platform;
//!
//! let custom = Config {
//!     roots: Some(serde_yaml::from_str("/mnt3/: /mnt/").unwrap()),
//!     platform: Some(Platform::Linux),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! let remapper = config.uniform_remapper().unwrap();
//! assert_eq!(remapper.remap_as(&["/mnt3/storage1/"], Platform::Linux), vec!["/mnt/storage1"]);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
