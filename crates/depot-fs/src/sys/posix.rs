//! POSIX path rules: `/` is the only separator, no drive letters, and the
//! native encoding is whatever bytes the filesystem handed out.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

pub(crate) const PREFERRED_SEPARATOR: u8 = b'/';

pub(crate) fn is_separator(b: u8) -> bool {
    b == b'/'
}

/// No drive-letter concept on POSIX.
pub(crate) fn strip_drive_letter(bytes: &[u8]) -> &[u8] {
    bytes
}

pub(crate) fn utf8_to_native(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

pub(crate) fn native_to_utf8(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

pub(crate) fn os_to_native(os: &OsStr) -> Vec<u8> {
    os.as_bytes().to_vec()
}

pub(crate) fn native_to_path(bytes: &[u8]) -> Cow<'_, Path> {
    Cow::Borrowed(Path::new(OsStr::from_bytes(bytes)))
}
