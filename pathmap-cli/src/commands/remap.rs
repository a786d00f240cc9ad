//! Remap command implementation.
//!
//! This module implements the `remap` command, which rewrites paths written
//! for any platform in a platform table into the destination platform's
//! mount points.

use crate::error::CliError;
use crate::utils::{collect_paths, load_configuration, print_records, GlobalOptions};
use clap::Args;
use log::debug;
use pathmap::config::OutputFormat;
use pathmap::{CrossPlatformRemapper, Platform, PlatformTable};
use std::fs;
use std::path::{Path, PathBuf};

/// Remap paths to another platform's mount points.
#[derive(Args)]
pub struct RemapCommand {
    /// Paths to remap (read from stdin, one per line, when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Destination platform (windows, linux or mac)
    #[arg(long, value_name = "PLATFORM")]
    pub to: Option<String>,

    /// YAML file mapping platform names to aligned lists of roots
    #[arg(long, value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Output format
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl RemapCommand {
    /// Execute the remap command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Pick the destination before reading any input
        let destination = match self.to {
            Some(ref name) => name.parse::<Platform>()?,
            None => config.destination.ok_or_else(|| {
                CliError::InvalidArguments(
                    "no destination platform given (use --to or set 'destination' in configuration)"
                        .to_string(),
                )
            })?,
        };

        // 3. Build the remapper from --mapping or the configured table
        let remapper = match self.mapping {
            Some(ref path) => CrossPlatformRemapper::new(load_mapping_file(path)?),
            None => config.cross_platform_remapper()?.ok_or_else(|| {
                CliError::Config(
                    "no 'platforms' table configured (use --mapping or add one to pathmap.yaml)"
                        .to_string(),
                )
            })?,
        };

        // 4. Remap
        let paths = collect_paths(self.paths)?;
        debug!("remapping {} path(s) to {destination}", paths.len());
        let remapped = remapper.remap(&paths, destination)?;

        // 5. Format and output to stdout
        let format = self.format.or(config.output_format).unwrap_or_default();
        let records: Vec<(String, String)> = paths.into_iter().zip(remapped).collect();
        print_records(format, "output", &records)
    }
}

/// Read a standalone platform table from a YAML file.
fn load_mapping_file(path: &Path) -> Result<PlatformTable, CliError> {
    let contents = fs::read_to_string(path)?;
    let mapping: serde_yaml::Mapping = serde_yaml::from_str(&contents)
        .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
    Ok(PlatformTable::from_yaml(&mapping)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_mapping_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mapping.yaml");
        fs::write(
            &path,
            "windows: ['L:\\', 'P:\\']\nlinux: [/mnt/storage1, /mnt/storage2]\n",
        )
        .unwrap();

        let table = load_mapping_file(&path).unwrap();
        assert_eq!(table.location_count(), 2);
        assert!(table.contains(Platform::Linux));
    }

    #[test]
    fn test_load_mapping_file_rejects_uniform_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mapping.yaml");
        fs::write(&path, "/mnt3/: /mnt/\n").unwrap();

        let err = load_mapping_file(&path).unwrap_err();
        assert!(matches!(err, CliError::Library(_)));
    }

    #[test]
    fn test_load_missing_mapping_file() {
        let dir = TempDir::new().unwrap();
        let err = load_mapping_file(&dir.path().join("missing.yaml")).unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }
}
