//! Property tests for whitespace-insensitive containment.

use proptest::prelude::*;

use kunit_insert::domain::services::{is_contained, normalize_whitespace};

fn words() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[A-Za-z0-9_$().+=:/-]{1,12}", 1..=6)
}

fn whitespace() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ \t\n]{1,4}").unwrap()
}

/// Join words with randomly chosen whitespace runs.
fn spaced(words: Vec<String>) -> impl Strategy<Value = String> {
    let n = words.len();
    proptest::collection::vec(whitespace(), n).prop_map(move |gaps| {
        words
            .iter()
            .zip(gaps)
            .map(|(word, gap)| format!("{word}{gap}"))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any content contains itself.
    #[test]
    fn property_reflexive(s in "(?s).{0,256}") {
        prop_assert!(is_contained(&s, &s));
    }

    /// PROPERTY: Re-spacing a fragment does not change whether it is found.
    #[test]
    fn property_whitespace_layout_is_ignored(
        (fragment, respaced) in words().prop_flat_map(|w| (spaced(w.clone()), spaced(w))),
        prefix in "[a-z ]{0,16}",
        suffix in "[a-z ]{0,16}",
    ) {
        let content = format!("{prefix}\n{respaced}\n{suffix}");
        prop_assert!(is_contained(&fragment, &content));
    }

    /// PROPERTY: Normalization is idempotent and leaves no whitespace runs.
    #[test]
    fn property_normalize_idempotent(s in "(?s).{0,256}") {
        let once = normalize_whitespace(&s);
        prop_assert_eq!(normalize_whitespace(&once), once.clone());
        prop_assert!(!once.contains("  "));
        prop_assert!(!once.contains('\t'));
        prop_assert!(!once.contains('\n'));
    }
}
