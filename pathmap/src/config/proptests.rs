//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use crate::platform::Platform;
use proptest::prelude::*;
use serde_yaml::{Mapping, Value};

fn platform_strategy() -> impl Strategy<Value = Platform> {
    prop_oneof![
        Just(Platform::Windows),
        Just(Platform::Linux),
        Just(Platform::Mac),
    ]
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Plain),
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Tsv),
    ]
}

fn roots_strategy() -> impl Strategy<Value = Mapping> {
    prop::collection::vec(("/[a-z]{1,4}", "/[a-z]{1,4}"), 0..6).prop_map(|pairs| {
        let mut mapping = Mapping::new();
        for (source, destination) in pairs {
            mapping.insert(Value::String(source), Value::String(destination));
        }
        mapping
    })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(platform_strategy()),
        prop::option::of(platform_strategy()),
        prop::option::of(format_strategy()),
        prop::option::of(roots_strategy()),
    )
        .prop_map(|(destination, platform, output_format, roots)| Config {
            destination,
            platform,
            output_format,
            roots,
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Set scalars from the higher-precedence config always win
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.destination, high.destination.or(low.destination));
        prop_assert_eq!(merged.platform, high.platform.or(low.platform));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
    }

    // Merging never loses a root key and never duplicates one
    #[test]
    fn merge_roots_keeps_every_key(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        let merged_roots = merged.roots.unwrap_or_default();
        for roots in [&low.roots, &high.roots].into_iter().flatten() {
            for key in roots.keys() {
                prop_assert!(merged_roots.contains_key(key));
            }
        }

        if let Some(high_roots) = &high.roots {
            for (key, value) in high_roots {
                prop_assert_eq!(merged_roots.get(key), Some(value));
            }
        }
    }

    // Merging with an empty config changes nothing
    #[test]
    fn merge_with_default_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Generated configs survive a YAML round trip through the schema
    #[test]
    fn config_yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
