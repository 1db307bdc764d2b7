//! Windows path rules: both `/` and `\` separate components, `\` is
//! preferred when joining, and a leading `C:`-style drive prefix is ignored
//! when deciding absoluteness.
//!
//! Native path bytes are kept as UTF-8 internally; conversion to the wide
//! encoding the Win32 API expects happens inside `std` at the I/O boundary.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub(crate) const PREFERRED_SEPARATOR: u8 = b'\\';

pub(crate) fn is_separator(b: u8) -> bool {
    b == b'/' || b == b'\\'
}

pub(crate) fn strip_drive_letter(bytes: &[u8]) -> &[u8] {
    if bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
        &bytes[2..]
    } else {
        bytes
    }
}

pub(crate) fn utf8_to_native(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

pub(crate) fn native_to_utf8(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

pub(crate) fn os_to_native(os: &OsStr) -> Vec<u8> {
    os.to_string_lossy().into_owned().into_bytes()
}

pub(crate) fn native_to_path(bytes: &[u8]) -> Cow<'_, Path> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(Path::new(s)),
        Err(_) => Cow::Owned(PathBuf::from(String::from_utf8_lossy(bytes).into_owned())),
    }
}
