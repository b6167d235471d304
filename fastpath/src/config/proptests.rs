//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::Config;
use crate::path::StyleName;
use proptest::prelude::*;

fn style_strategy() -> impl Strategy<Value = StyleName> {
    prop_oneof![
        Just(StyleName::Host),
        Just(StyleName::Posix),
        Just(StyleName::Windows),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(style_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(style, include_hidden, with_directory)| Config {
            style,
            include_hidden,
            with_directory,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher-precedence config wins, the rest fall through
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low;
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.style, high.style.or(low.style));
        prop_assert_eq!(merged.include_hidden, high.include_hidden.or(low.include_hidden));
        prop_assert_eq!(merged.with_directory, high.with_directory.or(low.with_directory));
    }

    // Merging a config with itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config;
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // YAML serialization preserves every field
    #[test]
    fn config_yaml_preserves_fields(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        prop_assert_eq!(Config::from_yaml_str(&yaml).unwrap(), config);
    }
}
