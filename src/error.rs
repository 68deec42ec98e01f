//! Error types for kunit-insert
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scaffolding operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Main error type for scaffolding operations
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// A file the run depends on (source, parent Makefile, parent Kconfig) is missing
    #[error("the file does not exist: {}", path.display())]
    MissingRequiredFile { path: PathBuf },

    /// The input path has no usable file name
    #[error("not a source file path: {}", path.display())]
    InvalidSourcePath { path: PathBuf },

    /// A layout name would point outside the source directory
    #[error("invalid layout: {message}")]
    InvalidLayout { message: String },

    /// Configuration could not be parsed or holds an invalid value
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScaffoldError {
    /// Shorthand for [`ScaffoldError::MissingRequiredFile`]
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self::MissingRequiredFile { path: path.into() }
    }
}
