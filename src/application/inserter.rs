//! Idempotent Inserter
//!
//! Appends text fragments to build and config files unless an equivalent
//! fragment (modulo whitespace layout) is already there.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::domain::ports::FileSystem;
use crate::domain::services::is_contained;
use crate::error::{ScaffoldError, ScaffoldResult};

/// What an insert call did to its target file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertOutcome {
    /// The file did not exist and was created with the fragment
    Created,
    /// The fragment was appended to the end of the file
    Appended,
    /// The fragment was already present; nothing was written
    AlreadyPresent,
}

impl InsertOutcome {
    /// `true` if the file was touched
    pub fn is_change(self) -> bool {
        !matches!(self, InsertOutcome::AlreadyPresent)
    }
}

impl fmt::Display for InsertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InsertOutcome::Created => "created",
            InsertOutcome::Appended => "appended",
            InsertOutcome::AlreadyPresent => "unchanged",
        };
        f.write_str(label)
    }
}

/// Check whether `fragment` is already in `target` (whitespace-insensitive).
///
/// # Errors
/// [`ScaffoldError::MissingRequiredFile`] if `target` does not exist.
pub fn contains(fs: &dyn FileSystem, target: &Path, fragment: &str) -> ScaffoldResult<bool> {
    Ok(is_contained(fragment, &fs.read(target)?))
}

/// Append `fragment` verbatim to an existing `target` unless already present.
///
/// # Errors
/// [`ScaffoldError::MissingRequiredFile`] if `target` does not exist; nothing
/// is written in that case.
pub fn append_if_absent(
    fs: &dyn FileSystem,
    target: &Path,
    fragment: &str,
) -> ScaffoldResult<InsertOutcome> {
    if !fs.exists(target) {
        return Err(ScaffoldError::missing(target));
    }
    if contains(fs, target, fragment)? {
        debug!(path = %target.display(), "fragment already present");
        return Ok(InsertOutcome::AlreadyPresent);
    }

    fs.append(target, fragment)?;
    info!(path = %target.display(), "appended");
    trace_content(fs, target);
    Ok(InsertOutcome::Appended)
}

/// Like [`append_if_absent`], but a missing `target` is created with
/// `fragment` as its whole content.
pub fn write_or_append_if_absent(
    fs: &dyn FileSystem,
    target: &Path,
    fragment: &str,
) -> ScaffoldResult<InsertOutcome> {
    if fs.exists(target) {
        return append_if_absent(fs, target, fragment);
    }

    fs.write(target, fragment)?;
    info!(path = %target.display(), "generated");
    trace_content(fs, target);
    Ok(InsertOutcome::Created)
}

fn trace_content(fs: &dyn FileSystem, target: &Path) {
    if tracing::enabled!(tracing::Level::TRACE) {
        if let Ok(content) = fs.read(target) {
            trace!(path = %target.display(), "content:\n{content}");
        }
    }
}
