//! Process-scoped filesystem configuration.
//!
//! The temp-directory default is resolved once, near startup, and passed
//! explicitly to whichever component needs it. There is deliberately no
//! lazily-initialised global cache.

use std::env;

use crate::NativePath;

/// Filesystem configuration resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsConfig {
    temp_dir: NativePath,
}

impl FsConfig {
    /// Resolve configuration from the environment.
    ///
    /// On POSIX this honours `TMPDIR`, falling back to `/tmp` when unset or
    /// empty. On Windows the OS-reported temp path is used.
    pub fn resolve() -> Self {
        Self {
            temp_dir: resolve_temp_dir(),
        }
    }

    /// Use a fixed temp directory instead of consulting the environment.
    pub fn with_temp_dir(temp_dir: NativePath) -> Self {
        Self { temp_dir }
    }

    /// The best directory in which to create temporary files.
    pub fn temp_dir(&self) -> &NativePath {
        &self.temp_dir
    }
}

impl Default for FsConfig {
    fn default() -> Self {
        Self::resolve()
    }
}

#[cfg(unix)]
fn resolve_temp_dir() -> NativePath {
    match env::var_os("TMPDIR") {
        Some(dir) if !dir.is_empty() => NativePath::from_os_str(&dir),
        _ => NativePath::from_utf8("/tmp"),
    }
}

#[cfg(windows)]
fn resolve_temp_dir() -> NativePath {
    NativePath::from_os_str(env::temp_dir().as_os_str())
}
