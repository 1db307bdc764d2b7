//! File primitives: stat-style probes and single-file deletion.

use std::fs;

use depot_status::{Error, Status, StatusOr};

use crate::NativePath;

pub struct File;

impl File {
    /// Unlink a single file.
    pub fn delete(path: &NativePath) -> Status {
        fs::remove_file(path.as_std_path().as_ref())
            .map_err(|e| Error::from_io_error(e, format!("Could not delete file {path}")))
    }

    /// Returns true if the path exists (file or directory).
    pub fn exists(path: &NativePath) -> bool {
        fs::metadata(path.as_std_path().as_ref()).is_ok()
    }

    /// Returns whether the path is a directory, or the underlying stat
    /// failure so the caller can distinguish "not a directory" from
    /// "could not find out" (e.g. `NotFound` vs `PermissionDenied`).
    pub fn is_directory(path: &NativePath) -> StatusOr<bool> {
        match fs::metadata(path.as_std_path().as_ref()) {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(e) => Err(Error::from_io_error(
                e,
                format!("Could not stat file {path}"),
            )),
        }
    }
}
