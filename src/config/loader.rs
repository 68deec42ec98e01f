//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::value_objects::Layout;
use crate::error::{ScaffoldError, ScaffoldResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::Config;

/// Project configuration file looked up next to the source file
pub const CONFIG_FILE_NAME: &str = ".kunit-insert.toml";

pub const ENV_TEST_DIR: &str = "KUNIT_INSERT_TEST_DIR";
pub const ENV_TEST_SUFFIX: &str = "KUNIT_INSERT_TEST_SUFFIX";
pub const ENV_GCOV: &str = "KUNIT_INSERT_GCOV";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ScaffoldResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ScaffoldError::missing(path),
        _ => ScaffoldError::Io(e),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ScaffoldError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config
        .layout
        .validate()
        .map_err(|message| ScaffoldError::InvalidConfig {
            file: path.to_path_buf(),
            message,
        })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for a run.
///
/// 1. `explicit` file, if given (must exist)
/// 2. `.kunit-insert.toml` in `source_dir`, if present
/// 3. Built-in defaults
///
/// Environment overrides are applied on top in every case.
pub fn load_or_default(
    explicit: Option<&Path>,
    source_dir: &Path,
) -> ScaffoldResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let project_config = source_dir.join(CONFIG_FILE_NAME);
            if project_config.is_file() {
                load_with_warnings(&project_config)?
            } else {
                (Config::default(), Vec::new())
            }
        }
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (KUNIT_INSERT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup.
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(ENV_TEST_DIR).filter(|v| !v.trim().is_empty()) {
        let candidate = Layout {
            test_dir: dir.trim().to_string(),
            ..config.layout.clone()
        };
        match candidate.validate() {
            Ok(()) => config.layout = candidate,
            Err(reason) => warn!(var = ENV_TEST_DIR, "ignoring invalid value: {reason}"),
        }
    }

    if let Some(suffix) = lookup(ENV_TEST_SUFFIX) {
        config.layout.test_suffix = suffix;
    }

    if let Some(gcov) = lookup(ENV_GCOV) {
        let current = config.coverage.gcov;
        config.coverage.gcov = EnvVarValidator::new(ENV_GCOV, BOOL_VALUES).parse(
            &gcov,
            parse_bool,
            current,
        );
    }

    config
}

const BOOL_VALUES: &[&str] = &["1", "true", "yes", "on", "0", "false", "no", "off"];

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "layout",
        "test_dir",
        "test_suffix",
        "build_file",
        "config_file",
        "coverage",
        "gcov",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
