//! A minimal on-disk storage engine for exercising the opener.

use std::fs;

use depot_fs::{File, NativePath};
use depot_opener::{OpenOptions, StorageEngine};
use depot_status::{Error, ErrorKind, StatusOr};

/// Name of the file marking an initialised store, in the spirit of an
/// engine's CURRENT/MANIFEST bookkeeping.
pub const MARKER_FILE: &str = "CURRENT";

/// Storage engine that represents an open store as a single marker file.
///
/// Honours the same open-flag contract a real embedded engine would:
/// an existing marker under `error_if_exists` fails `AlreadyExists`, a
/// missing marker without `create_if_missing` fails `NotFound`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerEngine;

/// Handle to an opened marker store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerHandle {
    directory: NativePath,
}

impl MarkerHandle {
    pub fn directory(&self) -> &NativePath {
        &self.directory
    }

    pub fn marker_path(&self) -> NativePath {
        self.directory.join(MARKER_FILE)
    }

    /// A handle is usable while its marker is still on disk.
    pub fn is_live(&self) -> bool {
        File::exists(&self.marker_path())
    }
}

impl StorageEngine for MarkerEngine {
    type Handle = MarkerHandle;

    fn open(&self, directory: &NativePath, options: OpenOptions) -> StatusOr<MarkerHandle> {
        let marker = directory.join(MARKER_FILE);
        let exists = File::exists(&marker);

        if exists && options.error_if_exists {
            return Err(Error::new(
                ErrorKind::AlreadyExists,
                format!("store already exists at {directory}"),
            ));
        }

        if !exists {
            if !options.create_if_missing {
                return Err(Error::new(
                    ErrorKind::NotFound,
                    format!("no store at {directory}"),
                ));
            }
            fs::write(marker.as_std_path(), b"MANIFEST-000001\n").map_err(|e| {
                Error::from_io_error(e, format!("Could not initialise store at {directory}"))
            })?;
        }

        Ok(MarkerHandle {
            directory: directory.clone(),
        })
    }
}
