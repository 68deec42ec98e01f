//! Guard Extractor Domain Service
//!
//! Finds the configuration symbol that gates an object file in a kbuild
//! `Makefile`. Only the `obj-$(SYMBOL) += foo.o` shape is recognized; this is
//! not a Makefile parser.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::value_objects::BuildGuard;

/// Captures the text inside `obj-$( ... )`.
static OBJ_GUARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"obj-\$\((.*?)\)").expect("guard pattern is valid"));

/// Extract the guard for `object` (e.g. `foo.o`) from Makefile `content`.
///
/// Every line mentioning `object` is tried in order and the last line that
/// matches wins. Lines that mention the object without a `obj-$(...)` guard
/// (e.g. `obj-y += foo.o`) leave the previous result untouched. No match at
/// all yields [`BuildGuard::Unconditional`].
pub fn extract_guard(content: &str, object: &str) -> BuildGuard {
    content
        .lines()
        .filter(|line| line.contains(object))
        .filter_map(guard_in_line)
        .last()
        .into()
}

fn guard_in_line(line: &str) -> Option<String> {
    OBJ_GUARD_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
