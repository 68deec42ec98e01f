//! Derived Names Value Object
//!
//! Every path and identifier a scaffold run needs, computed once from the
//! source file path.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::Layout;
use crate::error::{ScaffoldError, ScaffoldResult};

/// Names derived from a source file path.
///
/// For `drivers/foo/my-driver.c` with the default layout:
///
/// | field            | value                                    |
/// |------------------|------------------------------------------|
/// | `dir`            | `drivers/foo`                            |
/// | `stem`           | `my-driver`                              |
/// | `test_stem`      | `my-driver-test`                         |
/// | `namespace`      | `my_driver`                              |
/// | `config_symbol`  | `CONFIG_MY_DRIVER_TEST`                  |
/// | `source_object`  | `my-driver.o`                            |
/// | `test_object`    | `my_driver_test.o`                       |
/// | `test_dir`       | `drivers/foo/kunit_test`                 |
/// | `test_source`    | `drivers/foo/kunit_test/my_driver_test.c`|
///
/// Generated file and object names map `-` to `_`; the source object keeps
/// the real stem since it names an existing build product. No other
/// characters are normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedNames {
    pub dir: PathBuf,
    pub stem: String,
    pub test_stem: String,
    pub namespace: String,
    pub config_symbol: String,
    pub source_object: String,
    pub test_object: String,
    pub test_dir: PathBuf,
    pub test_source: PathBuf,
}

impl DerivedNames {
    /// Derive all names for `source` under `layout`.
    pub fn derive(source: &Path, layout: &Layout) -> ScaffoldResult<Self> {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty() && s != "..")
            .ok_or_else(|| ScaffoldError::InvalidSourcePath {
                path: source.to_path_buf(),
            })?;
        let dir = source.parent().map(Path::to_path_buf).unwrap_or_default();

        let namespace = stem.replace('-', "_");
        let test_stem = format!("{stem}{}", layout.test_suffix);
        let test_file_stem = test_stem.replace('-', "_");
        let test_dir = dir.join(&layout.test_dir);

        Ok(Self {
            config_symbol: config_symbol_for(&namespace),
            source_object: format!("{stem}.o"),
            test_object: format!("{test_file_stem}.o"),
            test_source: test_dir.join(format!("{test_file_stem}.c")),
            test_dir,
            dir,
            stem,
            test_stem,
            namespace,
        })
    }

    /// Kconfig symbol as written after the `config` keyword (no `CONFIG_` prefix)
    pub fn kconfig_name(&self) -> &str {
        self.config_symbol
            .strip_prefix("CONFIG_")
            .unwrap_or(&self.config_symbol)
    }

    /// Parent build-rule file
    pub fn build_file(&self, layout: &Layout) -> PathBuf {
        self.dir.join(&layout.build_file)
    }

    /// Parent feature-configuration file
    pub fn config_file(&self, layout: &Layout) -> PathBuf {
        self.dir.join(&layout.config_file)
    }

    /// Build-rule file inside the test directory
    pub fn test_build_file(&self, layout: &Layout) -> PathBuf {
        self.test_dir.join(&layout.build_file)
    }
}

/// `CONFIG_<NAMESPACE>_TEST` for a namespace such as `my_driver`.
pub fn config_symbol_for(namespace: &str) -> String {
    format!("CONFIG_{}_TEST", namespace.replace('-', "_").to_uppercase())
}
