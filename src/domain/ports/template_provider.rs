//! TemplateProvider port - source of the generated text bodies
//!
//! The scaffold use case treats every fragment as opaque text; it only
//! decides where each one goes and whether it is already present.

/// The three text bodies produced for one test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeletons {
    /// Kconfig symbol declaration block for the new test
    pub config_block: String,
    /// Makefile line gating the test object by its own symbol
    pub build_rule: String,
    /// Test source file body
    pub source: String,
}

/// Produces skeletons for a test.
///
/// Implementations must be deterministic in their inputs: identical
/// arguments must yield identical text, otherwise re-runs stop being no-ops.
pub trait TemplateProvider {
    /// Render the skeletons for `namespace` (e.g. `my_driver`) whose test
    /// compiles to `test_object` (e.g. `my_driver_test.o`).
    fn produce(&self, namespace: &str, test_object: &str) -> Skeletons;
}
