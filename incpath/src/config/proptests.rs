//! Property-based tests for configuration merging.

use std::path::PathBuf;

use super::merger::ConfigMerger;
use super::schema::Config;
use crate::output::OutputFormat;
use proptest::prelude::*;

fn folder_list_strategy() -> impl Strategy<Value = Option<Vec<PathBuf>>> {
    prop::option::of(prop::collection::vec(
        "/[a-z]{1,6}(/[a-z]{1,6}){0,2}".prop_map(PathBuf::from),
        0..6,
    ))
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Human),
        Just(OutputFormat::Json),
        Just(OutputFormat::Flags),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        folder_list_strategy(),
        folder_list_strategy(),
        folder_list_strategy(),
        prop::option::of(format_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(parse, include, resolve, format, fail)| Config {
            parse_folders: parse,
            include_folders: include,
            resolve_folders: resolve,
            output_format: format,
            fail_on_issues: fail,
        })
}

fn has_duplicates(list: &[PathBuf]) -> bool {
    list.iter()
        .enumerate()
        .any(|(i, p)| list[..i].contains(p))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Scalars from the higher layer win whenever they are set
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(result.fail_on_issues, high.fail_on_issues.or(low.fail_on_issues));
    }

    // Merged folder lists contain every input folder exactly once
    #[test]
    fn config_merge_folders_union_without_duplicates(
        low in config_strategy(),
        high in config_strategy(),
    ) {
        let mut result = Config::default();
        ConfigMerger::merge_into(&mut result, &low);
        ConfigMerger::merge_into(&mut result, &high);

        for (((_, merged), (_, a)), (_, b)) in result
            .folder_lists()
            .into_iter()
            .zip(low.folder_lists())
            .zip(high.folder_lists())
        {
            let merged = merged.clone().unwrap_or_default();
            prop_assert!(!has_duplicates(&merged));
            for folder in a.iter().flatten().chain(b.iter().flatten()) {
                prop_assert!(merged.contains(folder));
            }
            for folder in &merged {
                let in_inputs = a.iter().flatten().chain(b.iter().flatten()).any(|f| f == folder);
                prop_assert!(in_inputs);
            }
        }
    }

    // Empty config is identity element for merge
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Merging the same source twice changes nothing further
    #[test]
    fn config_merge_idempotent(base in config_strategy(), source in config_strategy()) {
        let mut once = base;
        ConfigMerger::merge_into(&mut once, &source);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &source);
        prop_assert_eq!(once, twice);
    }
}
