//! Configuration type definitions

use std::path::Path;

use serde::Deserialize;

use crate::error::ScaffoldResult;

use super::loader::{self, ConfigWarning};

// Re-export Layout from domain layer
pub use crate::domain::value_objects::Layout;

/// Coverage instrumentation configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoverageConfig {
    /// Emit `GCOV_PROFILE_<obj> := y` for the source under test
    #[serde(default = "default_true")]
    pub gcov: bool,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self { gcov: true }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
///
/// ```toml
/// [layout]
/// test_dir = "kunit_test"
/// test_suffix = "-test"
/// build_file = "Makefile"
/// config_file = "Kconfig"
///
/// [coverage]
/// gcov = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: Layout,

    #[serde(default)]
    pub coverage: CoverageConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ScaffoldResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> ScaffoldResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}
