//! The interface the embedded storage engine is consumed through.

use depot_fs::NativePath;
use depot_status::StatusOr;
use serde::{Deserialize, Serialize};

/// Engine open flags.
///
/// Both flags are caller-supplied; this crate imposes no defaults beyond
/// `false`/`false` via [`Default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenOptions {
    /// Create the on-disk store if none exists at the directory.
    #[serde(default)]
    pub create_if_missing: bool,
    /// Fail with `AlreadyExists` if a store is already present.
    #[serde(default)]
    pub error_if_exists: bool,
}

/// An embedded storage engine that can open (or create) an on-disk store
/// rooted at a native directory path.
///
/// Implementations are expected to report failures in the canonical
/// taxonomy; in particular an existing store under `error_if_exists` must
/// surface as `AlreadyExists` and a missing store without
/// `create_if_missing` as `NotFound`.
pub trait StorageEngine {
    type Handle;

    fn open(&self, directory: &NativePath, options: OpenOptions) -> StatusOr<Self::Handle>;
}
