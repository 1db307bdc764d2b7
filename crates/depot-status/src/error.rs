//! Annotatable failures and the `Status`/`StatusOr` result aliases.

use crate::ErrorKind;

/// Outcome of a fallible operation that produces no value.
pub type Status = Result<(), Error>;

/// Outcome of a fallible operation that produces a `T` on success.
pub type StatusOr<T> = Result<T, Error>;

/// A classified failure with a human-readable, appendable message.
///
/// Rendered as `"{canonical kind}: {message}"`, e.g.
/// `"Not found: Could not stat file /tmp/depot"`. Construction with
/// [`ErrorKind::Ok`] is a bug in the caller's classification logic and
/// panics rather than producing a recoverable failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// Create a failure of the given kind.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is [`ErrorKind::Ok`].
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        assert!(
            kind != ErrorKind::Ok,
            "ErrorKind::Ok is reserved for success"
        );
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create a failure classified from an errno value.
    ///
    /// The message becomes `"{msg} (errno {code}: {strerror})"` so the raw
    /// code survives in the diagnostic even though callers only ever branch
    /// on the canonical kind.
    ///
    /// # Panics
    ///
    /// Panics if `code` is zero; a success code is never an error.
    #[cfg(unix)]
    pub fn from_errno(code: i32, msg: impl AsRef<str>) -> Self {
        let detail = std::io::Error::from_raw_os_error(code);
        Self::new(
            ErrorKind::from_errno(code),
            format!("{} (errno {}: {})", msg.as_ref(), code, detail),
        )
    }

    /// Create a failure classified from a Windows last-error value.
    ///
    /// # Panics
    ///
    /// Panics if `code` is `ERROR_SUCCESS`.
    #[cfg(windows)]
    pub fn from_last_error(code: u32, msg: impl AsRef<str>) -> Self {
        let detail = std::io::Error::from_raw_os_error(code as i32);
        Self::new(
            ErrorKind::from_last_error(code),
            format!("{} (error {}: {})", msg.as_ref(), code, detail),
        )
    }

    /// Create a failure from an [`std::io::Error`], classifying via the raw
    /// OS code when one is present.
    pub fn from_io_error(err: std::io::Error, msg: impl AsRef<str>) -> Self {
        match err.raw_os_error() {
            #[cfg(unix)]
            Some(code) => Self::from_errno(code, msg),
            #[cfg(windows)]
            Some(code) => Self::from_last_error(code as u32, msg),
            None => Self {
                kind: ErrorKind::Unknown,
                message: format!("{} ({})", msg.as_ref(), err),
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a new failure with the same kind and `extra` appended to the
    /// message, semicolon-joined. Annotating with an empty string returns
    /// the failure unchanged; the original message is never replaced, so the
    /// root cause survives every layer of context.
    #[must_use]
    pub fn annotate(self, extra: impl AsRef<str>) -> Self {
        let extra = extra.as_ref();
        if extra.is_empty() {
            return self;
        }
        let message = if self.message.is_empty() {
            extra.to_string()
        } else {
            format!("{}; {}", self.message, extra)
        };
        Self {
            kind: self.kind,
            message,
        }
    }
}

/// Status-style combinators on `Result`s carrying an [`Error`].
pub trait StatusExt {
    /// Append context to a failure; no-op on success.
    #[must_use]
    fn annotate(self, extra: impl AsRef<str>) -> Self;

    /// Replace `self` with `other` only if `self` is currently a success.
    ///
    /// Folding a sequence of statuses through `update` keeps the first
    /// failure and discards the rest.
    fn update(&mut self, other: Self);

    /// Explicitly discard the outcome.
    ///
    /// Marks the call site as having decided not to check this status,
    /// distinguishing intentional suppression from an accidentally dropped
    /// failure.
    fn ignore_error(self);

    /// Render as `"OK"` or `"{canonical kind}: {message}"`.
    fn render(&self) -> String;
}

impl<T> StatusExt for StatusOr<T> {
    fn annotate(self, extra: impl AsRef<str>) -> Self {
        self.map_err(|e| e.annotate(extra))
    }

    fn update(&mut self, other: Self) {
        if self.is_ok() {
            *self = other;
        }
    }

    fn ignore_error(self) {}

    fn render(&self) -> String {
        match self {
            Ok(_) => "OK".to_string(),
            Err(e) => e.to_string(),
        }
    }
}
