//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHMAP_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::platform::Platform;
use std::env;

/// Overrides the default cross-platform destination.
pub const DESTINATION_ENV: &str = "PATHMAP_DESTINATION";

/// Overrides the default uniform-remap platform.
pub const PLATFORM_ENV: &str = "PATHMAP_PLATFORM";

/// Overrides the output format.
pub const OUTPUT_FORMAT_ENV: &str = "PATHMAP_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathmap::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable names an unsupported platform or an
    /// unknown output format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(value) = Self::read(DESTINATION_ENV) {
            config.destination = Some(Self::parse_platform(DESTINATION_ENV, &value)?);
        }

        if let Some(value) = Self::read(PLATFORM_ENV) {
            config.platform = Some(Self::parse_platform(PLATFORM_ENV, &value)?);
        }

        if let Some(value) = Self::read(OUTPUT_FORMAT_ENV) {
            config.output_format =
                Some(value.parse::<OutputFormat>().map_err(|message| Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message,
                })?);
        }

        Ok(())
    }

    fn read(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }

    fn parse_platform(field: &str, value: &str) -> Result<Platform> {
        value.parse().map_err(|e: Error| Error::Validation {
            field: field.into(),
            message: e.to_string(),
        })
    }
}
