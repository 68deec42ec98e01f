//! kunit-insert - scaffold KUnit tests in a kernel tree
//!
//! Given a source file, kunit-insert creates `kunit_test/` next to it, writes
//! a test skeleton and a kbuild `Makefile` for it, and registers the test in
//! the parent `Makefile` and `Kconfig`. Every insertion is idempotent:
//! running it again over the same tree changes nothing.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ScaffoldOptions, ScaffoldReport, ScaffoldUseCase, StepRecord, TargetRole,
};
pub use config::Config;
pub use domain::services::{extract_guard, is_contained, normalize_whitespace};
pub use domain::value_objects::{BuildGuard, DerivedNames, Layout};
pub use error::{ScaffoldError, ScaffoldResult};
pub use presentation::create_scaffold_use_case;
