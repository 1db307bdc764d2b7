//! Shared test utilities for the depot workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each invent their own. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`scratch`] — fixed scratch directories under the temp dir, with
//!   clear-before-use helpers
//! - [`engine`] — [`MarkerEngine`], a minimal on-disk storage engine honest
//!   about `create_if_missing`/`error_if_exists`
//!
//! [`MarkerEngine`]: engine::MarkerEngine

use std::sync::Once;

pub mod engine;
pub mod scratch;

pub use engine::{MarkerEngine, MarkerHandle};
pub use scratch::{clear_scratch, scratch_dir};

static INIT: Once = Once::new();

/// Initialise a tracing subscriber for test output, once per process.
///
/// Honours `RUST_LOG`; silent by default.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
