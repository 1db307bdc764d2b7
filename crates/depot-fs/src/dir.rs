//! Directory primitives: create, delete, and their recursive forms.
//!
//! All operations are synchronous, blocking system calls with no internal
//! locking; a concurrent mutation of the same subtree during a recursive
//! traversal can leave partial state. Callers that need isolation must
//! serialise access themselves.

use std::fs;
use std::io;

use depot_status::{Error, ErrorKind, Status};
use tracing::debug;

use crate::{File, NativePath, PathView, sys};

pub struct Dir;

impl Dir {
    /// Create a single directory. Succeeds if it already exists.
    pub fn create(path: &NativePath) -> Status {
        match fs::create_dir(path.as_std_path().as_ref()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(Error::from_io_error(
                e,
                format!("Could not create directory {path}"),
            )),
        }
    }

    /// Remove a single empty directory. Succeeds if the path does not exist
    /// or is not a directory; a non-empty directory is still an error.
    pub fn delete(path: &NativePath) -> Status {
        match fs::remove_dir(path.as_std_path().as_ref()) {
            Ok(()) => Ok(()),
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                Ok(())
            }
            Err(e) => Err(Error::from_io_error(
                e,
                format!("Could not delete directory {path}"),
            )),
        }
    }

    /// Returns true if the path exists and is a directory.
    pub fn exists(path: &NativePath) -> bool {
        File::is_directory(path).unwrap_or(false)
    }

    /// Create every directory in the path that does not yet exist.
    ///
    /// Tries a plain create first; only a `NotFound` failure (missing
    /// parent) triggers recursion on `dirname`, after which the create is
    /// retried once. Any other failure is fatal and propagates unchanged:
    /// permission problems or invalid names will not be fixed by recursing.
    pub fn recursively_create(path: &NativePath) -> Status {
        let result = Self::create(path);
        match &result {
            Ok(()) => return result,
            Err(e) if e.kind() != ErrorKind::NotFound => return result,
            Err(_) => {}
        }

        // dirname strictly shortens the path toward the root; if it stops
        // making progress there is no parent left to create.
        let parent = path.dirname();
        if parent.is_empty() || parent == *path {
            return result;
        }

        debug!(path = %path, parent = %parent, "creating missing parent directory");
        Self::recursively_create(&parent)?;

        // Parent exists now, so try again.
        Self::create(path)
    }

    /// Delete the path and everything beneath it.
    ///
    /// A path that does not exist is a success (delete-if-present). A plain
    /// file is unlinked directly. Deletion is not transactional: the first
    /// per-entry failure aborts the traversal, and already-deleted siblings
    /// stay deleted.
    pub fn recursively_delete(path: &NativePath) -> Status {
        let is_dir = match File::is_directory(path) {
            Ok(is_dir) => is_dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e),
        };

        if is_dir {
            recursively_delete_dir(path)
        } else {
            File::delete(path)
        }
    }
}

/// Recursively deletes a path known to be a directory.
fn recursively_delete_dir(parent: &NativePath) -> Status {
    let entries = fs::read_dir(parent.as_std_path().as_ref())
        .map_err(|e| Error::from_io_error(e, format!("Could not read directory {parent}")))?;

    // read_dir never yields the `.`/`..` pseudo-entries.
    for entry in entries {
        let entry = entry
            .map_err(|e| Error::from_io_error(e, format!("Could not read directory {parent}")))?;
        let name = sys::os_to_native(&entry.file_name());
        let child = parent.join_view(PathView::new(&name));
        Dir::recursively_delete(&child)?;
    }

    debug!(path = %parent, "removing emptied directory");
    fs::remove_dir(parent.as_std_path().as_ref())
        .map_err(|e| Error::from_io_error(e, format!("Could not delete directory {parent}")))
}
