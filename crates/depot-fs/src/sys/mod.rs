//! Platform-specific path rules: separator set, preferred separator,
//! drive-letter handling, and conversion between native path bytes and OS
//! strings.
//!
//! One contract, two implementations selected at build time. Both must
//! satisfy the same path-algorithm properties; only the separator set and
//! the encoding boundary differ.

#[cfg(unix)]
mod posix;
#[cfg(unix)]
pub(crate) use posix::*;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub(crate) use windows::*;
