//! Property tests for names derived from a source path.

use std::path::Path;

use proptest::prelude::*;

use kunit_insert::domain::value_objects::{DerivedNames, Layout};

fn stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,15}").unwrap()
}

fn dir() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9_]{1,8}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|s| format!("/{}", s.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Derivation never panics on arbitrary paths.
    #[test]
    fn property_derive_never_panics(s in "(?s).{0,128}") {
        let _ = DerivedNames::derive(Path::new(&s), &Layout::default());
    }

    /// PROPERTY: Derived names are consistent with each other.
    #[test]
    fn property_names_consistent(dir in dir(), stem in stem()) {
        let source = format!("{dir}/{stem}.c");
        let names = DerivedNames::derive(Path::new(&source), &Layout::default()).unwrap();
        let underscored = stem.replace('-', "_");

        prop_assert_eq!(&names.source_object, &format!("{stem}.o"));
        prop_assert_eq!(&names.test_object, &format!("{underscored}_test.o"));
        prop_assert_eq!(&names.config_symbol, &format!("CONFIG_{}_TEST", underscored.to_uppercase()));
        prop_assert_eq!(names.test_dir, Path::new(&dir).join("kunit_test"));
        prop_assert_eq!(
            names.test_source,
            Path::new(&dir).join("kunit_test").join(format!("{underscored}_test.c"))
        );
        prop_assert!(!names.test_object.contains('-'));
    }
}
