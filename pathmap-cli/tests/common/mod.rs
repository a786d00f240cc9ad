//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that isolate the binary from the host
//! - Configuration fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test.
const PATHMAP_ENV_VARS: [&str; 6] = [
    "PATHMAP_CONFIG",
    "PATHMAP_DATA_DIR",
    "PATHMAP_DESTINATION",
    "PATHMAP_PLATFORM",
    "PATHMAP_OUTPUT_FORMAT",
    "PATHMAP_LOG_MODE",
];

/// Studio layout shared by several tests: three storage locations, the
/// second of which is not mounted on Macs.
#[allow(dead_code)]
pub const STUDIO_CONFIG: &str = r"
platforms:
  windows: ['L:\', 'P:\', 'G:\']
  linux: [/mnt/storage1, /mnt/storage2, /mnt/storage3]
  mac: [/Volumes/storage1, null, /Volumes/storage2]
roots:
  /mnt/storage1/: /mnt2/storage2/
  /mnt3/: /mnt/
";

/// Test environment with isolated data and project directories.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory that becomes the working directory
/// - A separate data directory for the user configuration
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Project directory the binary runs in
    pub project_dir: PathBuf,
    /// Path to the pathmap data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with empty project and data directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path().join("project");
        let data_dir = temp_dir.path().join("pathmap-data");
        std::fs::create_dir_all(&project_dir).expect("Failed to create project dir");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            project_dir,
            data_dir,
        }
    }

    /// Create an environment whose project has `pathmap.yaml` set to `contents`.
    pub fn with_project_config(contents: &str) -> Self {
        let env = Self::new();
        env.write_project_file("pathmap.yaml", contents);
        env
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// The host's `PATHMAP_*` variables are removed and the working directory
    /// is the project directory.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathmap").expect("Failed to find pathmap binary");
        for var in PATHMAP_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.project_dir);
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the project directory.
    pub fn path(&self) -> &Path {
        &self.project_dir
    }

    /// Write a file into the project directory and return its path.
    pub fn write_project_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.project_dir.join(name);
        std::fs::write(&path, contents).expect("Failed to write project file");
        path
    }

    /// Write the user configuration file in the data directory.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let path = self.data_dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run pathmap");
        assert!(
            output.status.success(),
            "pathmap {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
