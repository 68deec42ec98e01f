//! Containment Domain Service
//!
//! Decides whether a text fragment is already present in a file, ignoring
//! whitespace layout. This is what keeps repeated runs from duplicating
//! Makefile lines, Kconfig blocks and test bodies.

/// Collapse every run of whitespace (newlines included) into one space and
/// trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `true` if `fragment` occurs in `content` once both are whitespace-normalized.
///
/// A whitespace-only fragment is always contained.
pub fn is_contained(fragment: &str, content: &str) -> bool {
    normalize_whitespace(content).contains(&normalize_whitespace(fragment))
}
