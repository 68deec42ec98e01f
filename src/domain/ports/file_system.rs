//! FileSystem port - abstraction over file I/O operations
//!
//! The inserter and the scaffold use case only touch the disk through this
//! trait, so they can run against the local disk or an in-memory double.

use std::path::Path;

use crate::error::ScaffoldResult;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MemoryFs` - in-memory for testing
///
/// Reading a path that does not exist must fail with
/// [`ScaffoldError::MissingRequiredFile`](crate::error::ScaffoldError::MissingRequiredFile).
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> ScaffoldResult<String>;

    /// Create a new file with `content` (or replace an existing one)
    fn write(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Append `content` to the end of an existing file
    fn append(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and any missing parents
    fn create_dir(&self, path: &Path) -> ScaffoldResult<()>;
}
