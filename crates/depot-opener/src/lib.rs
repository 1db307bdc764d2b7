//! Store-opening orchestration for depot
//!
//! Given a target directory, [`StoreOpener`] guarantees the directory tree
//! exists and then hands off to an embedded storage engine through the
//! [`StorageEngine`] trait, returning the engine handle or an annotated
//! failure. The engine itself is an external collaborator; this crate only
//! prepares the ground and wraps the outcome.

pub mod config;
pub mod engine;
pub mod opener;

pub use config::StoreConfig;
pub use engine::{OpenOptions, StorageEngine};
pub use opener::{ClearingEnsurer, CreateEnsurer, DirectoryEnsurer, StoreOpener};
