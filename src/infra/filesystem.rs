//! Filesystem operations
//!
//! Handles removal of project artifacts.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::LifecycleError;

/// What [`remove_path`] found at a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Directory,
    File,
    Absent,
}

/// Remove a directory tree, a single file, or nothing
///
/// Symlinks are removed themselves, never followed. A missing path is not an
/// error, so repeated calls converge on the same state.
pub fn remove_path(path: &Path) -> Result<Removal, LifecycleError> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Removal::Absent),
        Err(e) => return Err(remove_error(path, &e)),
    };

    if metadata.is_dir() {
        std::fs::remove_dir_all(path).map_err(|e| remove_error(path, &e))?;
        Ok(Removal::Directory)
    } else {
        std::fs::remove_file(path).map_err(|e| remove_error(path, &e))?;
        Ok(Removal::File)
    }
}

fn remove_error(path: &Path, error: &std::io::Error) -> LifecycleError {
    LifecycleError::RemovePath {
        path: path.to_path_buf(),
        error: error.to_string(),
    }
}
