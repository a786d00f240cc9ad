//! Configuration validation.
//!
//! This module checks that the configured tables can be built and that the
//! scalar defaults are consistent with them.

use log::warn;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::{resolve, PathRelationship};

/// Validates configuration.
///
/// # Examples
///
/// ```
/// use pathmap::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// Shadowed `roots` entries are not errors; they are reported through
    /// [`ConfigValidator::warnings`] and logged at warn level.
    ///
    /// # Errors
    ///
    /// Returns the table construction error if `roots` or `platforms` is
    /// malformed, and [`Error::Validation`] if `destination` is not a key of
    /// `platforms`.
    pub fn validate(config: &Config) -> Result<()> {
        config.root_table()?;
        let platforms = config.platform_table()?;

        if let (Some(destination), Some(platforms)) = (config.destination, &platforms) {
            if !platforms.contains(destination) {
                return Err(Error::Validation {
                    field: "destination".into(),
                    message: format!("platform '{destination}' is not a key of platforms"),
                });
            }
        }

        for warning in Self::warnings(config) {
            warn!("{warning}");
        }

        Ok(())
    }

    /// Non-fatal problems with a configuration.
    ///
    /// Currently reports `roots` entries that can never match because an
    /// earlier entry's source root contains theirs.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::config::{Config, ConfigValidator};
    ///
    /// let config: Config = serde_yaml::from_str("roots:\n  /mnt: /a\n  /mnt/x: /b\n").unwrap();
    /// let warnings = ConfigValidator::warnings(&config);
    /// assert_eq!(warnings.len(), 1);
    /// assert!(warnings[0].contains("/mnt/x"));
    /// ```
    #[must_use]
    pub fn warnings(config: &Config) -> Vec<String> {
        let Ok(Some(roots)) = config.root_table() else {
            return Vec::new();
        };

        roots
            .shadowed_entries()
            .into_iter()
            .map(|(earlier, later)| {
                let (outer, inner) = (&roots.entries()[earlier].0, &roots.entries()[later].0);
                let (outer_path, inner_path) = (resolve(outer), resolve(inner));
                let relationship = PathRelationship::between(&outer_path, &inner_path);
                format!(
                    "roots entry '{inner}' is unreachable: {}",
                    relationship.description(&outer_path, &inner_path)
                )
            })
            .collect()
    }
}
