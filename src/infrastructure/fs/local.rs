//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations. Every handle is
//! a scoped value, so it is closed on every exit path, `?` returns included.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::FileSystem;
use crate::error::{ScaffoldError, ScaffoldResult};

/// Local file system implementation
///
/// New files are written atomically (tempfile + rename); appends go straight
/// to the end of the existing file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

fn not_found_as_missing(path: &Path) -> impl FnOnce(io::Error) -> ScaffoldError + '_ {
    move |err| match err.kind() {
        io::ErrorKind::NotFound => ScaffoldError::missing(path),
        _ => ScaffoldError::Io(err),
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> ScaffoldResult<String> {
        let file = File::open(path).map_err(not_found_as_missing(path))?;
        let mut content = String::new();
        BufReader::new(file).read_to_string(&mut content)?;
        Ok(content)
    }

    fn write(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(not_found_as_missing(dir))?;
        tmp.write_all(content.as_bytes())?;
        // Temp files are created 0600.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file().set_permissions(fs::Permissions::from_mode(0o644))?;
        }
        tmp.persist(path).map_err(|e| ScaffoldError::Io(e.error))?;
        Ok(())
    }

    fn append(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(not_found_as_missing(path))?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> ScaffoldResult<()> {
        fs::create_dir_all(path).map_err(not_found_as_missing(path))
    }
}
