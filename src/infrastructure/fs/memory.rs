//! In-memory file system for unit tests

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::error::{ScaffoldError, ScaffoldResult};

/// Map-backed file system. Directories are tracked separately so
/// `create_dir` and `exists` behave like the local disk.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (its parent directory is registered too)
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.dirs.borrow_mut().insert(parent.to_path_buf());
        }
        self.files.borrow_mut().insert(path, content.to_string());
        self
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> ScaffoldResult<String> {
        self.content(path)
            .ok_or_else(|| ScaffoldError::missing(path))
    }

    fn write(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn append(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut files = self.files.borrow_mut();
        let existing = files
            .get_mut(path)
            .ok_or_else(|| ScaffoldError::missing(path))?;
        existing.push_str(content);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn create_dir(&self, path: &Path) -> ScaffoldResult<()> {
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }
}
