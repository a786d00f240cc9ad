//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources,
//! with special handling for the two mapping tables.

use serde_yaml::Mapping;

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathmap::config::{Config, ConfigMerger};
/// use pathmap::Platform;
///
/// let low = Config { destination: Some(Platform::Linux), ..Default::default() };
/// let high = Config { destination: Some(Platform::Mac), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.destination, Some(Platform::Mac));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Scalar fields: source overwrites if Some
    /// - `roots`: accumulated, with the source's entries placed first so they
    ///   win the first-match scan; a source entry replaces a target entry
    ///   with the same key
    /// - `platforms`: complete replacement, since aligned lists from
    ///   different files cannot be combined position by position
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.destination.is_some() {
            target.destination = source.destination;
        }

        if source.platform.is_some() {
            target.platform = source.platform;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.platforms.is_some() {
            target.platforms.clone_from(&source.platforms);
        }

        if let Some(ref source_roots) = source.roots {
            target.roots = Some(match &target.roots {
                Some(target_roots) => Self::merge_roots(target_roots, source_roots),
                None => source_roots.clone(),
            });
        }
    }

    fn merge_roots(lower: &Mapping, higher: &Mapping) -> Mapping {
        let mut merged = higher.clone();
        for (key, value) in lower {
            if !merged.contains_key(key) {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::OutputFormat;
    use crate::platform::Platform;
    use std::path::PathBuf;

    fn yaml(s: &str) -> Mapping {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_scalars_overwrite_when_set() {
        let mut target = Config {
            destination: Some(Platform::Linux),
            platform: Some(Platform::Windows),
            ..Default::default()
        };
        let source = Config {
            destination: Some(Platform::Mac),
            output_format: Some(OutputFormat::Csv),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.destination, Some(Platform::Mac));
        assert_eq!(target.platform, Some(Platform::Windows));
        assert_eq!(target.output_format, Some(OutputFormat::Csv));
    }

    #[test]
    fn test_roots_accumulate_higher_first() {
        let mut target = Config {
            roots: Some(yaml("/a: /x\n/b: /y\n")),
            ..Default::default()
        };
        let source = Config {
            roots: Some(yaml("/c: /z\n/a: /w\n")),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        let table = target.root_table().unwrap().unwrap();
        let entries: Vec<(&str, &str)> = table.iter().collect();
        assert_eq!(entries, vec![("/c", "/z"), ("/a", "/w"), ("/b", "/y")]);
    }

    #[test]
    fn test_platforms_replaced_wholesale() {
        let mut target = Config {
            platforms: Some(yaml("windows: ['L:\\']\nlinux: [/mnt/storage1]\n")),
            ..Default::default()
        };
        let source = Config {
            platforms: Some(yaml("mac: [/Volumes/storage1]\n")),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        let table = target.platform_table().unwrap().unwrap();
        assert_eq!(table.platforms().collect::<Vec<_>>(), vec![Platform::Mac]);
    }

    #[test]
    fn test_merge_sources_in_order() {
        let sources = vec![
            ConfigSource {
                path: PathBuf::from("user.yaml"),
                precedence: 1,
                config: Config {
                    destination: Some(Platform::Linux),
                    ..Default::default()
                },
            },
            ConfigSource {
                path: PathBuf::from("pathmap.yaml"),
                precedence: 2,
                config: Config {
                    destination: Some(Platform::Windows),
                    ..Default::default()
                },
            },
        ];

        let merged = ConfigMerger::merge(sources);
        assert_eq!(merged.destination, Some(Platform::Windows));
    }
}
