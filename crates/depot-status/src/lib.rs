//! Canonical error taxonomy and status propagation for depot
//!
//! Every fallible operation in the workspace speaks the same vocabulary: a
//! closed set of [`ErrorKind`]s mapped from native OS error codes, carried by
//! an annotatable [`Error`]. Layers above the filesystem primitives never
//! inspect a raw errno or Windows last-error value.

pub mod error;
pub mod kind;

pub use error::{Error, Status, StatusExt, StatusOr};
pub use kind::ErrorKind;
