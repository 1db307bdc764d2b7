//! Native path handling and directory primitives for depot
//!
//! Provides the portable foundation the store-opening layer is built on:
//!
//! - [`PathView`]/[`NativePath`] — pure path decomposition and joining with
//!   identical semantics on every platform
//! - [`Dir`]/[`File`] — blocking filesystem primitives returning
//!   [`depot_status::Status`] outcomes classified by canonical error kind
//! - [`FsConfig`] — process-scoped configuration (temp-directory default)
//!   resolved once and passed explicitly

pub mod config;
pub mod dir;
pub mod file;
pub mod path;
mod sys;

pub use config::FsConfig;
pub use dir::Dir;
pub use file::File;
pub use path::{NativePath, PathView};
