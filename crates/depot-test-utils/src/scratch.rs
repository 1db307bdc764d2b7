//! Fixed scratch directories for store tests.

use depot_fs::{Dir, FsConfig, NativePath};
use depot_status::{Status, StatusExt};

/// Path of a named scratch directory under the resolved temp dir, e.g.
/// `/tmp/depot-store-testing`. Nothing is created on disk.
pub fn scratch_dir(name: &str) -> NativePath {
    FsConfig::resolve().temp_dir().join(name)
}

/// Delete the scratch directory and everything in it, if present.
///
/// Used before a run to guarantee isolation from previous runs; a missing
/// directory is already-clean.
pub fn clear_scratch(dir: &NativePath) -> Status {
    if Dir::exists(dir) {
        Dir::recursively_delete(dir)
            .annotate(format!("failed to clean up scratch path {dir}"))?;
    }
    Ok(())
}
