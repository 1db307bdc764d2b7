//! Directory preparation and the open sequence.

use depot_fs::{Dir, NativePath};
use depot_status::{Status, StatusExt, StatusOr};
use tracing::debug;

use crate::engine::{OpenOptions, StorageEngine};

/// Capability for making the target directory ready before the engine sees
/// it.
pub trait DirectoryEnsurer {
    fn ensure(&self, directory: &NativePath) -> Status;
}

/// Production behaviour: recursively create whatever part of the directory
/// tree is missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateEnsurer;

impl DirectoryEnsurer for CreateEnsurer {
    fn ensure(&self, directory: &NativePath) -> Status {
        Dir::recursively_create(directory)
    }
}

/// Test-oriented behaviour: wipe any pre-existing contents, then create.
///
/// This is the one place deletion and creation are chained; it guarantees a
/// clean starting state for runs that must not observe leftovers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearingEnsurer;

impl DirectoryEnsurer for ClearingEnsurer {
    fn ensure(&self, directory: &NativePath) -> Status {
        if Dir::exists(directory) {
            Dir::recursively_delete(directory)
                .annotate(format!("failed to clear existing contents of {directory}"))?;
        }
        Dir::recursively_create(directory)
    }
}

/// Opens a store, creating the directories required to contain its data
/// files first.
///
/// Composition over overriding: the preparation step is a
/// [`DirectoryEnsurer`] value, so the clearing test variant is the same
/// opener with a different ensurer rather than a subtype.
pub struct StoreOpener<E, D = CreateEnsurer> {
    engine: E,
    ensurer: D,
    directory: NativePath,
    options: OpenOptions,
}

impl<E: StorageEngine> StoreOpener<E, CreateEnsurer> {
    pub fn new(engine: E, directory: NativePath, options: OpenOptions) -> Self {
        Self {
            engine,
            ensurer: CreateEnsurer,
            directory,
            options,
        }
    }
}

impl<E: StorageEngine, D: DirectoryEnsurer> StoreOpener<E, D> {
    pub fn with_ensurer(engine: E, ensurer: D, directory: NativePath, options: OpenOptions) -> Self {
        Self {
            engine,
            ensurer,
            directory,
            options,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn directory(&self) -> &NativePath {
        &self.directory
    }

    pub fn options(&self) -> OpenOptions {
        self.options
    }

    /// Ensure the directory tree exists, then delegate to the engine.
    ///
    /// Failures from either step come back annotated with the store
    /// location; the underlying kind and message are preserved.
    pub fn open(&self) -> StatusOr<E::Handle> {
        debug!(directory = %self.directory, "opening store");

        self.ensurer
            .ensure(&self.directory)
            .annotate(format!("failed to prepare store directory {}", self.directory))?;

        self.engine
            .open(&self.directory, self.options)
            .annotate(format!("failed to open store at {}", self.directory))
    }
}
