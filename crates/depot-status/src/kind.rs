//! The closed set of canonical error kinds and the native-code mapping tables.

use std::fmt;

/// Canonical classification of a failure.
///
/// Native OS error codes are collapsed onto these kinds by caller-relevant
/// consequence rather than raw OS meaning: "no space left on device" and
/// "too many open files" are both [`ErrorKind::ResourceExhausted`] even
/// though the OS defines them independently. Callers branch on these sixteen
/// failure kinds instead of dozens of platform codes.
///
/// `Ok` is reserved for success and must never be attached to an [`Error`];
/// see [`Error::new`].
///
/// [`Error`]: crate::Error
/// [`Error::new`]: crate::Error::new
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Ok,
    Cancelled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    Unauthenticated,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
}

impl ErrorKind {
    /// Human-readable name used as the prefix of rendered failures.
    pub fn canonical_name(self) -> &'static str {
        match self {
            ErrorKind::Ok => "OK",
            ErrorKind::Cancelled => "Cancelled",
            ErrorKind::Unknown => "Unknown",
            ErrorKind::InvalidArgument => "Invalid argument",
            ErrorKind::DeadlineExceeded => "Deadline exceeded",
            ErrorKind::NotFound => "Not found",
            ErrorKind::AlreadyExists => "Already exists",
            ErrorKind::PermissionDenied => "Permission denied",
            ErrorKind::Unauthenticated => "Unauthenticated",
            ErrorKind::ResourceExhausted => "Resource exhausted",
            ErrorKind::FailedPrecondition => "Failed precondition",
            ErrorKind::Aborted => "Aborted",
            ErrorKind::OutOfRange => "Out of range",
            ErrorKind::Unimplemented => "Unimplemented",
            ErrorKind::Internal => "Internal",
            ErrorKind::Unavailable => "Unavailable",
            ErrorKind::DataLoss => "Data loss",
        }
    }

    /// Classify a raw OS error code as reported by
    /// [`std::io::Error::raw_os_error`].
    pub fn from_raw_os_error(code: i32) -> ErrorKind {
        #[cfg(unix)]
        {
            ErrorKind::from_errno(code)
        }
        #[cfg(windows)]
        {
            ErrorKind::from_last_error(code as u32)
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

#[cfg(unix)]
impl ErrorKind {
    /// Returns the canonical kind for the given errno value.
    ///
    /// Total over all inputs: every unmapped code is `Unknown`. The grouping
    /// below is authoritative; when a code could conceptually fit two kinds,
    /// its placement in this table decides.
    pub fn from_errno(code: i32) -> ErrorKind {
        match code {
            0 => ErrorKind::Ok,

            // Bad file descriptors indicate an internal error in our own
            // file handling, not a failed precondition of the caller.
            libc::EBADF => ErrorKind::Internal,
            #[cfg(any(target_os = "linux", target_os = "android"))]
            libc::EBADFD => ErrorKind::Internal,

            libc::EINVAL        // Invalid argument
            | libc::ENAMETOOLONG // Filename too long
            | libc::E2BIG        // Argument list too long
            | libc::EDESTADDRREQ // Destination address required
            | libc::EDOM         // Mathematics argument out of domain
            | libc::EFAULT       // Bad address
            | libc::EILSEQ       // Illegal byte sequence
            | libc::ENOPROTOOPT  // Protocol not available
            | libc::ENOTSOCK     // Not a socket
            | libc::ENOTTY       // Inappropriate I/O control operation
            | libc::EPROTOTYPE   // Protocol wrong type for socket
            | libc::ESPIPE       // Invalid seek
            => ErrorKind::InvalidArgument,

            libc::ETIMEDOUT // Connection timed out
            | libc::ETIME   // Timer expired
            => ErrorKind::DeadlineExceeded,

            libc::ENODEV  // No such device
            | libc::ENOENT // No such file or directory
            | libc::ENXIO  // No such device or address
            | libc::ESRCH  // No such process
            => ErrorKind::NotFound,
            #[cfg(any(target_os = "linux", target_os = "android"))]
            libc::ENOMEDIUM => ErrorKind::NotFound,

            libc::EEXIST          // File exists
            | libc::EADDRNOTAVAIL // Address not available
            | libc::EALREADY      // Connection already in progress
            => ErrorKind::AlreadyExists,
            #[cfg(any(target_os = "linux", target_os = "android"))]
            libc::ENOTUNIQ => ErrorKind::AlreadyExists,

            libc::EPERM   // Operation not permitted
            | libc::EACCES // Permission denied
            | libc::EROFS  // Read only file system
            => ErrorKind::PermissionDenied,
            #[cfg(any(target_os = "linux", target_os = "android"))]
            libc::ENOKEY => ErrorKind::PermissionDenied,

            libc::ENOTEMPTY   // Directory not empty
            | libc::EISDIR     // Is a directory
            | libc::ENOTDIR    // Not a directory
            | libc::EADDRINUSE // Address already in use
            | libc::EBUSY      // Device or resource busy
            | libc::ECHILD     // No child processes
            | libc::EISCONN    // Socket is connected
            | libc::ENOTBLK    // Block device required
            | libc::ENOTCONN   // The socket is not connected
            | libc::EPIPE      // Broken pipe
            | libc::ESHUTDOWN  // Cannot send after endpoint shutdown
            | libc::ETXTBSY    // Text file busy
            => ErrorKind::FailedPrecondition,
            #[cfg(any(target_os = "linux", target_os = "android"))]
            libc::EISNAM | libc::EUNATCH => ErrorKind::FailedPrecondition,

            libc::ENOSPC   // No space left on device
            | libc::EDQUOT  // Disk quota exceeded
            | libc::EMFILE  // Too many open files
            | libc::EMLINK  // Too many links
            | libc::ENFILE  // Too many open files in system
            | libc::ENOBUFS // No buffer space available
            | libc::ENOMEM  // Not enough space
            | libc::EUSERS  // Too many users
            => ErrorKind::ResourceExhausted,
            #[cfg(any(target_os = "linux", target_os = "android"))]
            libc::ENODATA | libc::ENOSR => ErrorKind::ResourceExhausted,

            libc::EFBIG      // File too large
            | libc::EOVERFLOW // Value too large for data type
            | libc::ERANGE    // Result too large
            => ErrorKind::OutOfRange,
            #[cfg(any(target_os = "linux", target_os = "android"))]
            libc::ECHRNG => ErrorKind::OutOfRange,

            libc::ENOSYS             // Function not implemented
            | libc::ENOTSUP           // Operation not supported
            | libc::EAFNOSUPPORT      // Address family not supported
            | libc::EPFNOSUPPORT      // Protocol family not supported
            | libc::EPROTONOSUPPORT   // Protocol not supported
            | libc::ESOCKTNOSUPPORT   // Socket type not supported
            | libc::EXDEV             // Improper link
            => ErrorKind::Unimplemented,
            #[cfg(any(target_os = "linux", target_os = "android"))]
            libc::ENOPKG => ErrorKind::Unimplemented,

            libc::EAGAIN        // Resource temporarily unavailable
            | libc::ECONNREFUSED // Connection refused
            | libc::ECONNABORTED // Connection aborted
            | libc::ECONNRESET   // Connection reset
            | libc::EINTR        // Interrupted function call
            | libc::EHOSTDOWN    // Host is down
            | libc::EHOSTUNREACH // Host is unreachable
            | libc::ENETDOWN     // Network is down
            | libc::ENETRESET    // Connection aborted by network
            | libc::ENETUNREACH  // Network unreachable
            | libc::ENOLCK       // No locks available
            | libc::ENOLINK      // Link has been severed
            => ErrorKind::Unavailable,
            #[cfg(any(target_os = "linux", target_os = "android"))]
            libc::ECOMM | libc::ENONET => ErrorKind::Unavailable,

            libc::EDEADLK // Resource deadlock avoided
            | libc::ESTALE // Stale file handle
            => ErrorKind::Aborted,

            libc::ECANCELED => ErrorKind::Cancelled,

            _ => ErrorKind::Unknown,
        }
    }
}

#[cfg(windows)]
impl ErrorKind {
    // Win32 error codes as returned by GetLastError(); only the codes the
    // mapping below references.
    const ERROR_SUCCESS: u32 = 0;
    const ERROR_INVALID_FUNCTION: u32 = 1;
    const ERROR_FILE_NOT_FOUND: u32 = 2;
    const ERROR_PATH_NOT_FOUND: u32 = 3;
    const ERROR_TOO_MANY_OPEN_FILES: u32 = 4;
    const ERROR_ACCESS_DENIED: u32 = 5;
    const ERROR_INVALID_HANDLE: u32 = 6;
    const ERROR_NOT_ENOUGH_MEMORY: u32 = 8;
    const ERROR_OUTOFMEMORY: u32 = 14;
    const ERROR_INVALID_DRIVE: u32 = 15;
    const ERROR_NO_MORE_FILES: u32 = 18;
    const ERROR_WRITE_PROTECT: u32 = 19;
    const ERROR_NOT_READY: u32 = 21;
    const ERROR_SHARING_VIOLATION: u32 = 32;
    const ERROR_LOCK_VIOLATION: u32 = 33;
    const ERROR_HANDLE_DISK_FULL: u32 = 39;
    const ERROR_DEV_NOT_EXIST: u32 = 55;
    const ERROR_BAD_NETPATH: u32 = 53;
    const ERROR_FILE_EXISTS: u32 = 80;
    const ERROR_CALL_NOT_IMPLEMENTED: u32 = 120;
    const ERROR_INVALID_NAME: u32 = 123;
    const ERROR_DISK_FULL: u32 = 112;
    const ERROR_INVALID_ACCESS: u32 = 12;
    const ERROR_ALREADY_EXISTS: u32 = 183;

    /// Returns the canonical kind for a Windows last-error value.
    ///
    /// Total over all inputs: every unmapped code is `Unknown`.
    pub fn from_last_error(code: u32) -> ErrorKind {
        match code {
            Self::ERROR_SUCCESS => ErrorKind::Ok,

            Self::ERROR_INVALID_ACCESS => ErrorKind::Internal,

            Self::ERROR_INVALID_FUNCTION
            | Self::ERROR_INVALID_HANDLE
            | Self::ERROR_INVALID_NAME => ErrorKind::InvalidArgument,

            Self::ERROR_FILE_NOT_FOUND
            | Self::ERROR_PATH_NOT_FOUND
            | Self::ERROR_INVALID_DRIVE
            | Self::ERROR_BAD_NETPATH
            | Self::ERROR_DEV_NOT_EXIST => ErrorKind::NotFound,

            Self::ERROR_FILE_EXISTS | Self::ERROR_ALREADY_EXISTS => ErrorKind::AlreadyExists,

            Self::ERROR_ACCESS_DENIED
            | Self::ERROR_SHARING_VIOLATION
            | Self::ERROR_WRITE_PROTECT
            | Self::ERROR_LOCK_VIOLATION => ErrorKind::PermissionDenied,

            Self::ERROR_TOO_MANY_OPEN_FILES
            | Self::ERROR_NOT_ENOUGH_MEMORY
            | Self::ERROR_OUTOFMEMORY
            | Self::ERROR_NO_MORE_FILES
            | Self::ERROR_DISK_FULL
            | Self::ERROR_HANDLE_DISK_FULL => ErrorKind::ResourceExhausted,

            Self::ERROR_CALL_NOT_IMPLEMENTED => ErrorKind::Unimplemented,

            Self::ERROR_NOT_READY => ErrorKind::Unavailable,

            _ => ErrorKind::Unknown,
        }
    }
}
