//! Store configuration loaded from TOML.

use std::fs;

use depot_fs::NativePath;
use depot_status::{Error, ErrorKind, StatusOr};
use serde::{Deserialize, Serialize};

use crate::engine::OpenOptions;

/// Declarative description of a store to open.
///
/// ```toml
/// directory = "/var/lib/depot/main"
/// create_if_missing = true
/// error_if_exists = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Target directory, UTF-8; converted to the native encoding when used.
    pub directory: String,
    #[serde(default)]
    pub create_if_missing: bool,
    #[serde(default)]
    pub error_if_exists: bool,
}

impl StoreConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> StatusOr<Self> {
        toml::from_str(text).map_err(|e| {
            Error::new(
                ErrorKind::InvalidArgument,
                format!("invalid store config: {e}"),
            )
        })
    }

    /// Load a configuration file.
    pub fn load(path: &NativePath) -> StatusOr<Self> {
        let text = fs::read_to_string(path.as_std_path().as_ref())
            .map_err(|e| Error::from_io_error(e, format!("Could not read config {path}")))?;
        Self::from_toml_str(&text)
    }

    pub fn directory(&self) -> NativePath {
        NativePath::from_utf8(&self.directory)
    }

    pub fn options(&self) -> OpenOptions {
        OpenOptions {
            create_if_missing: self.create_if_missing,
            error_if_exists: self.error_if_exists,
        }
    }
}
