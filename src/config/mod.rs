//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (KUNIT_INSERT_*)
//! 3. Config file (`--config` or `.kunit-insert.toml` next to the source)
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    load_or_default, load_with_warnings, with_env_overrides, with_overrides_from, ConfigWarning,
    CONFIG_FILE_NAME, ENV_GCOV, ENV_TEST_DIR, ENV_TEST_SUFFIX,
};
pub use types::{Config, CoverageConfig, Layout};
