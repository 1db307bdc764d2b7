//! Borrowed and owning views over native path strings.
//!
//! Path algorithms here follow a deliberate "no canonicalization" policy:
//! runs of separators are only collapsed where the contract says so, and
//! `.`/`..` segments are never resolved. In particular `basename` of a path
//! that ends in separators is the empty string, which differs from strict
//! POSIX `basename(1)` but matches what the directory-creation and
//! store-opening code downstream is written against. Do not "fix" this to
//! agree with POSIX.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use crate::sys;

/// A non-owning view over a run of native path bytes.
///
/// All operations return new views into the same backing buffer; nothing
/// here allocates or touches the filesystem.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PathView<'a> {
    bytes: &'a [u8],
}

impl<'a> PathView<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(self) -> &'a [u8] {
        self.bytes
    }

    pub fn is_empty(self) -> bool {
        self.bytes.is_empty()
    }

    pub fn len(self) -> usize {
        self.bytes.len()
    }

    /// The unqualified trailing component, e.g. `"c"` for `"/a/b/c"`.
    ///
    /// With no separator present this is the whole path; after a trailing
    /// separator it is the empty string.
    pub fn basename(self) -> PathView<'a> {
        match self.last_separator(self.bytes.len()) {
            // No separator => the whole string.
            None => self,
            // Everything after the separator, even if empty.
            Some(sep) => PathView::new(&self.bytes[sep + 1..]),
        }
    }

    /// The parent directory name, e.g. `"/a/b"` for `"/a/b/c"`.
    ///
    /// Separator runs immediately before the last segment collapse to a
    /// single representative, so `dirname("/a/b//c")` is `"/a/b"`, but the
    /// rest of the path is left alone: `dirname("/a//b//c")` is `"/a//b"`.
    /// No separator yields the empty string (POSIX would say `"."`); a path
    /// of only separators yields a single separator.
    pub fn dirname(self) -> PathView<'a> {
        let Some(last_sep) = self.last_separator(self.bytes.len()) else {
            return PathView::new(&self.bytes[..0]);
        };

        match self.last_non_separator(last_sep) {
            // Only separators precede the last segment.
            None => PathView::new(&self.bytes[..1]),
            Some(non_sep) => PathView::new(&self.bytes[..non_sep + 1]),
        }
    }

    /// True iff, after stripping an optional drive-letter prefix, the first
    /// remaining byte is a separator. The empty path is not absolute.
    pub fn is_absolute(self) -> bool {
        let stripped = sys::strip_drive_letter(self.bytes);
        !stripped.is_empty() && sys::is_separator(stripped[0])
    }

    pub fn to_utf8_lossy(self) -> Cow<'a, str> {
        sys::native_to_utf8(self.bytes)
    }

    /// Index of the last separator strictly before `pos`.
    fn last_separator(self, pos: usize) -> Option<usize> {
        let end = pos.min(self.bytes.len());
        self.bytes[..end]
            .iter()
            .rposition(|&b| sys::is_separator(b))
    }

    /// Index of the last non-separator strictly before `pos`.
    pub(crate) fn last_non_separator(self, pos: usize) -> Option<usize> {
        let end = pos.min(self.bytes.len());
        self.bytes[..end]
            .iter()
            .rposition(|&b| !sys::is_separator(b))
    }
}

impl fmt::Debug for PathView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PathView({:?})", self.to_utf8_lossy())
    }
}

impl fmt::Display for PathView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_utf8_lossy())
    }
}

/// An owning path string in the platform's native encoding.
///
/// Constructed from UTF-8 or copied out of a [`PathView`]; converted to
/// [`std::path::Path`] only at I/O boundaries. Equality and hashing are
/// byte-wise over the native representation.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct NativePath {
    bytes: Vec<u8>,
}

impl NativePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a path from UTF-8, converting to the native encoding.
    pub fn from_utf8(s: impl AsRef<str>) -> Self {
        Self {
            bytes: sys::utf8_to_native(s.as_ref()),
        }
    }

    /// Copy a view into an owning path.
    pub fn from_view(view: PathView<'_>) -> Self {
        Self {
            bytes: view.as_bytes().to_vec(),
        }
    }

    /// Build a path from an OS string at an I/O boundary (e.g. a directory
    /// entry name or an environment variable).
    pub fn from_os_str(os: impl AsRef<OsStr>) -> Self {
        Self {
            bytes: sys::os_to_native(os.as_ref()),
        }
    }

    pub fn view(&self) -> PathView<'_> {
        PathView::new(&self.bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_utf8_lossy(&self) -> Cow<'_, str> {
        sys::native_to_utf8(&self.bytes)
    }

    /// Borrow as a [`Path`] for handing to `std::fs`.
    pub fn as_std_path(&self) -> Cow<'_, Path> {
        sys::native_to_path(&self.bytes)
    }

    pub fn basename(&self) -> NativePath {
        NativePath::from_view(self.view().basename())
    }

    pub fn dirname(&self) -> NativePath {
        NativePath::from_view(self.view().dirname())
    }

    pub fn is_absolute(&self) -> bool {
        self.view().is_absolute()
    }

    /// Append one path segment in place.
    ///
    /// An absolute `part` replaces the accumulated path entirely. A relative
    /// `part` is appended after trimming the accumulator's trailing
    /// separators and inserting exactly one preferred separator; if the
    /// accumulator is empty or all separators, nothing is trimmed or
    /// inserted. An empty `part` contributes nothing.
    pub fn push(&mut self, part: PathView<'_>) {
        if part.is_empty() {
            return;
        }

        if part.is_absolute() {
            self.bytes.clear();
            self.bytes.extend_from_slice(part.as_bytes());
            return;
        }

        if let Some(non_sep) = self.view().last_non_separator(self.bytes.len()) {
            self.bytes.truncate(non_sep + 1);
            self.bytes.push(sys::PREFERRED_SEPARATOR);
        }
        self.bytes.extend_from_slice(part.as_bytes());
    }

    /// Returns `self` joined with a UTF-8 segment; see [`NativePath::push`]
    /// for the replace-if-absolute semantics.
    #[must_use]
    pub fn join(&self, part: impl AsRef<str>) -> NativePath {
        let native = sys::utf8_to_native(part.as_ref());
        let mut result = self.clone();
        result.push(PathView::new(&native));
        result
    }

    /// Returns `self` joined with a native segment.
    #[must_use]
    pub fn join_view(&self, part: PathView<'_>) -> NativePath {
        let mut result = self.clone();
        result.push(part);
        result
    }
}

impl fmt::Debug for NativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativePath({:?})", self.to_utf8_lossy())
    }
}

impl fmt::Display for NativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_utf8_lossy())
    }
}

impl From<&str> for NativePath {
    fn from(s: &str) -> Self {
        Self::from_utf8(s)
    }
}

impl From<&Path> for NativePath {
    fn from(p: &Path) -> Self {
        Self::from_os_str(p.as_os_str())
    }
}

impl<'a> From<&'a NativePath> for PathView<'a> {
    fn from(path: &'a NativePath) -> Self {
        path.view()
    }
}
