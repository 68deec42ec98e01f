//! Layout Value Object
//!
//! File and directory names the scaffold reads and writes next to the
//! source file.

use std::path::{Component, Path};

use serde::Deserialize;

/// Subdirectory holding generated tests
pub const DEFAULT_TEST_DIR: &str = "kunit_test";
/// Suffix appended to the source stem to form the test stem
pub const DEFAULT_TEST_SUFFIX: &str = "-test";
/// Build-rule file name, both in the parent and the test directory
pub const DEFAULT_BUILD_FILE: &str = "Makefile";
/// Feature-configuration file name in the parent directory
pub const DEFAULT_CONFIG_FILE: &str = "Kconfig";

/// On-disk naming conventions for one scaffold run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Layout {
    #[serde(default = "default_test_dir")]
    pub test_dir: String,

    #[serde(default = "default_test_suffix")]
    pub test_suffix: String,

    #[serde(default = "default_build_file")]
    pub build_file: String,

    #[serde(default = "default_config_file")]
    pub config_file: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            test_dir: default_test_dir(),
            test_suffix: default_test_suffix(),
            build_file: default_build_file(),
            config_file: default_config_file(),
        }
    }
}

impl Layout {
    /// Check that every name stays inside the source directory.
    ///
    /// `test_dir` must be a non-empty relative path made of plain
    /// components (no `.`, `..` or root); `build_file` and `config_file`
    /// must be plain file names. The message names the offending key.
    pub fn validate(&self) -> Result<(), String> {
        if !is_plain_relative(&self.test_dir) {
            return Err(format!(
                "test_dir must be a relative directory below the source file, got '{}'",
                self.test_dir
            ));
        }
        for (key, value) in [
            ("build_file", &self.build_file),
            ("config_file", &self.config_file),
        ] {
            if !is_plain_relative(value) || Path::new(value).components().count() != 1 {
                return Err(format!("{key} must be a plain file name, got '{value}'"));
            }
        }
        Ok(())
    }
}

fn is_plain_relative(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    let mut components = Path::new(value).components().peekable();
    components.peek().is_some() && components.all(|c| matches!(c, Component::Normal(_)))
}

fn default_test_dir() -> String {
    DEFAULT_TEST_DIR.to_string()
}

fn default_test_suffix() -> String {
    DEFAULT_TEST_SUFFIX.to_string()
}

fn default_build_file() -> String {
    DEFAULT_BUILD_FILE.to_string()
}

fn default_config_file() -> String {
    DEFAULT_CONFIG_FILE.to_string()
}
