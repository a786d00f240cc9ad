#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathmap
//!
//! A library for remapping file-system paths between the mount layouts of
//! different machines.
//!
//! The same storage is often mounted at `L:\` on Windows workstations,
//! `/mnt/storage1` on Linux render nodes and `/Volumes/storage1` on Macs.
//! Given a table of equivalent roots, pathmap rewrites paths from one layout
//! to another. All work is textual: nothing touches the file system, so any
//! host can remap paths for any other.
//!
//! ## Core Types
//!
//! - [`UniformRemapper`] and [`RootTable`]: remap between roots written in
//!   the same convention
//! - [`CrossPlatformRemapper`] and [`PlatformTable`]: remap between Windows
//!   and POSIX layouts
//! - [`ResolvedPath`], [`PathStyle`] and [`Platform`]: textual path model
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathmap::{CrossPlatformRemapper, Platform, PlatformTable};
//!
//! let table = PlatformTable::new(vec![
//!     (Platform::Windows, vec![Some(r"L:\".into()), Some(r"P:\".into())]),
//!     (Platform::Linux, vec![Some("/mnt/storage1".into()), Some("/mnt/storage2".into())]),
//! ])
//! .unwrap();
//!
//! let remapper = CrossPlatformRemapper::new(table);
//! let paths = remapper
//!     .remap(&["/mnt/storage3/../storage1/project1/textures/wood.tga"], Platform::Windows)
//!     .unwrap();
//! assert_eq!(paths, vec![r"L:\project1\textures\wood.tga"]);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod path;
pub mod platform;
pub mod remap;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use mapping::{PlatformTable, RootTable};
pub use path::{build_destination, detect_style, normalize, resolve, PathRelationship, ResolvedPath};
pub use platform::{PathStyle, Platform};
pub use remap::{CrossPlatformRemapper, UniformRemapper};
