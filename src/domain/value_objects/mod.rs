//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod build_guard;
mod derived_names;
mod layout;

pub use build_guard::BuildGuard;
pub use derived_names::{config_symbol_for, DerivedNames};
pub use layout::{
    Layout, DEFAULT_BUILD_FILE, DEFAULT_CONFIG_FILE, DEFAULT_TEST_DIR, DEFAULT_TEST_SUFFIX,
};
