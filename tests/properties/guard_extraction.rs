//! Property tests for Makefile guard extraction.

use proptest::prelude::*;

use kunit_insert::domain::services::extract_guard;
use kunit_insert::domain::value_objects::BuildGuard;

fn symbol() -> impl Strategy<Value = String> {
    proptest::string::string_regex("CONFIG_[A-Z0-9_]{1,16}").unwrap()
}

fn object() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,12}").unwrap().prop_map(|s| format!("{s}.o"))
}

/// Lines that never mention an object file.
fn noise() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[# A-Za-z=:]{0,24}", 0..=4)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Extraction never panics on arbitrary input.
    #[test]
    fn property_never_panics(content in "(?s).{0,512}", obj in "(?s).{0,16}") {
        let _ = extract_guard(&content, &obj);
    }

    /// PROPERTY: A single guarded rule is found regardless of surrounding noise.
    #[test]
    fn property_finds_guard(
        sym in symbol(),
        obj in object(),
        before in noise(),
        after in noise(),
    ) {
        let mut lines = before;
        lines.push(format!("obj-$({sym})\t+= {obj}"));
        lines.extend(after);

        prop_assert_eq!(extract_guard(&lines.join("\n"), &obj), BuildGuard::Symbol(sym));
    }

    /// PROPERTY: Without any guarded line for the object the guard is `y`.
    #[test]
    fn property_defaults_to_unconditional(obj in object(), lines in noise()) {
        let content = format!("{}\nobj-y += {obj}\n", lines.join("\n"));
        prop_assert_eq!(extract_guard(&content, &obj), BuildGuard::Unconditional);
    }
}
