//! Property-based tests for directive parsing.

use super::directive::{parse_directive, INCLUDE_PREFIX};
use proptest::prelude::*;

// Include text never contains either closing delimiter.
fn include_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./-]{0,40}"
}

fn trailing_strategy() -> impl Strategy<Value = String> {
    "[ a-zA-Z0-9/*_.-]{0,30}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Well-formed quoted directives yield exactly the quoted text
    #[test]
    fn quoted_directive_round_trips(text in include_text_strategy(), tail in trailing_strategy()) {
        let line = format!("{INCLUDE_PREFIX}\"{text}\"{tail}");
        prop_assert_eq!(parse_directive(&line), Some(text.as_str()));
    }

    // Well-formed angle directives yield exactly the bracketed text
    #[test]
    fn angle_directive_round_trips(text in include_text_strategy(), tail in trailing_strategy()) {
        let line = format!("{INCLUDE_PREFIX}<{text}>{tail}");
        prop_assert_eq!(parse_directive(&line), Some(text.as_str()));
    }

    // Lines without the exact prefix are never directives
    #[test]
    fn lines_without_prefix_never_match(line in "[^#].{0,60}") {
        prop_assert_eq!(parse_directive(&line), None);
    }

    // Extracted text is always free of delimiters
    #[test]
    fn extracted_text_has_no_delimiters(rest in ".{0,60}") {
        let line = format!("{INCLUDE_PREFIX}{rest}");
        if let Some(text) = parse_directive(&line) {
            prop_assert!(!text.contains('"'));
            prop_assert!(!text.contains('>'));
        }
    }
}
