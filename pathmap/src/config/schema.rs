//! Configuration schema definitions.
//!
//! This module defines the configuration structure for pathmap: the two
//! mapping tables and the defaults used by the command-line tool.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use crate::error::Result;
use crate::mapping::{PlatformTable, RootTable};
use crate::platform::Platform;
use crate::remap::{CrossPlatformRemapper, UniformRemapper};

/// Complete configuration structure.
///
/// The tables are kept as raw YAML mappings so that their entry order is
/// preserved exactly as written; they are checked and converted to typed
/// tables on demand.
///
/// # Examples
///
/// ```
/// use pathmap::config::Config;
/// use pathmap::Platform;
///
/// let config: Config = serde_yaml::from_str(r"
/// platforms:
///   windows: ['L:\', 'P:\']
///   linux: [/mnt/storage1, /mnt/storage2]
/// destination: linux
/// ").unwrap();
///
/// assert_eq!(config.destination, Some(Platform::Linux));
/// let remapper = config.cross_platform_remapper().unwrap().unwrap();
/// assert_eq!(remapper.remap_one(r"P:\x", Platform::Linux).unwrap(), "/mnt/storage2/x");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Cross-platform table: platform name to aligned list of roots.
    pub platforms: Option<Mapping>,

    /// Uniform table: source root to destination root, in match order.
    pub roots: Option<Mapping>,

    /// Default destination platform for cross-platform remapping.
    pub destination: Option<Platform>,

    /// Default platform for uniform remapping. When unset, path styles are
    /// detected from the paths themselves.
    pub platform: Option<Platform>,

    /// Output format for the command-line tool.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The uniform table, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the `roots` mapping is malformed.
    pub fn root_table(&self) -> Result<Option<RootTable>> {
        self.roots.as_ref().map(RootTable::from_yaml).transpose()
    }

    /// The cross-platform table, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the `platforms` mapping is malformed.
    pub fn platform_table(&self) -> Result<Option<PlatformTable>> {
        self.platforms
            .as_ref()
            .map(PlatformTable::from_yaml)
            .transpose()
    }

    /// Build a uniform remapper from the `roots` table.
    ///
    /// A missing table yields a remapper that passes every path through.
    ///
    /// # Errors
    ///
    /// Returns an error if the `roots` mapping is malformed.
    pub fn uniform_remapper(&self) -> Result<UniformRemapper> {
        Ok(UniformRemapper::new(self.root_table()?.unwrap_or_default()))
    }

    /// Build a cross-platform remapper from the `platforms` table, if one is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the `platforms` mapping is malformed.
    pub fn cross_platform_remapper(&self) -> Result<Option<CrossPlatformRemapper>> {
        Ok(self.platform_table()?.map(CrossPlatformRemapper::new))
    }
}

/// Output format for command results.
///
/// # Examples
///
/// ```
/// use pathmap::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("TSV".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One result per line.
    #[default]
    Plain,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(format!(
                "invalid output format: '{s}' (expected plain, json, csv or tsv)"
            )),
        }
    }
}
