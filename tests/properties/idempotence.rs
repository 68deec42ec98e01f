//! Property tests for idempotent insertion against the local filesystem.

use proptest::prelude::*;
use tempfile::tempdir;

use kunit_insert::application::{append_if_absent, write_or_append_if_absent, InsertOutcome};
use kunit_insert::infrastructure::LocalFs;

fn fragment() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z0-9_$()+=./-]{1,10}", 1..=5)
        .prop_map(|words| format!("{}\n", words.join("\t")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Appending the same fragment twice writes it once.
    #[test]
    fn property_append_twice_is_noop(initial in "[a-z \n]{0,64}", frag in fragment()) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Makefile");
        std::fs::write(&path, &initial).unwrap();
        let fs = LocalFs::new();

        let first = append_if_absent(&fs, &path, &frag).unwrap();
        let after_first = std::fs::read_to_string(&path).unwrap();
        let second = append_if_absent(&fs, &path, &frag).unwrap();

        prop_assert_eq!(second, InsertOutcome::AlreadyPresent);
        prop_assert_eq!(std::fs::read_to_string(&path).unwrap(), after_first.clone());
        if first == InsertOutcome::Appended {
            prop_assert_eq!(after_first, format!("{initial}{frag}"));
        }
    }

    /// PROPERTY: A generated file holds exactly its fragment, and regenerating changes nothing.
    #[test]
    fn property_generate_then_skip(frag in fragment()) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("foo_test.c");
        let fs = LocalFs::new();

        prop_assert_eq!(write_or_append_if_absent(&fs, &path, &frag).unwrap(), InsertOutcome::Created);
        prop_assert_eq!(write_or_append_if_absent(&fs, &path, &frag).unwrap(), InsertOutcome::AlreadyPresent);
        prop_assert_eq!(std::fs::read_to_string(&path).unwrap(), frag);
    }
}
