//! Error types for metadata propagation.

use std::path::PathBuf;

/// Error type for snapshot reads and metadata application.
///
/// Variants carry the path and operation involved where applicable.
/// Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use acl_inherit::InheritError;
/// use std::path::PathBuf;
///
/// let err = InheritError::NotFound { path: PathBuf::from("/missing") };
/// assert_eq!(err.to_string(), "not found: /missing");
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum InheritError {
    /// Path does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The path has no parent to inherit metadata from.
    #[error("no parent to inherit from: {path}")]
    NoParent {
        /// The path without a parent.
        path: PathBuf,
    },

    /// The filesystem does not implement ACL operations.
    ///
    /// Returned by [`FsStatus::acl_status`](crate::FsStatus::acl_status) and
    /// the ACL-set operations on filesystems without ACL support. Treated as
    /// a soft degrade by the snapshot builder and the recursive executor.
    #[error("ACLs not supported: {path}")]
    AclsUnsupported {
        /// The path on the non-ACL filesystem.
        path: PathBuf,
    },

    /// Permission denied for a metadata operation.
    #[error("{operation}: permission denied: {path}")]
    PermissionDenied {
        /// The path where permission was denied.
        path: PathBuf,
        /// The operation that was denied.
        operation: &'static str,
    },

    /// A bulk recursive operation exited with a nonzero status.
    #[error("recursive {operation} exited with code {code} for {path}")]
    CommandFailed {
        /// The recursive operation that failed.
        operation: &'static str,
        /// The target path of the operation.
        path: PathBuf,
        /// The nonzero exit code.
        code: i32,
    },

    /// I/O error with context.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Generic backend error.
    #[error("backend error: {0}")]
    Backend(String),
}

impl From<std::io::Error> for InheritError {
    fn from(error: std::io::Error) -> Self {
        // Map common io::ErrorKind values to more specific variants
        match error.kind() {
            std::io::ErrorKind::NotFound => InheritError::NotFound {
                path: PathBuf::new(),
            },
            std::io::ErrorKind::PermissionDenied => InheritError::PermissionDenied {
                path: PathBuf::new(),
                operation: "io",
            },
            std::io::ErrorKind::Unsupported => InheritError::AclsUnsupported {
                path: PathBuf::new(),
            },
            _ => InheritError::Io {
                operation: "io",
                path: PathBuf::new(),
                source: error,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = InheritError::NotFound {
            path: PathBuf::from("/missing"),
        };
        assert_eq!(err.to_string(), "not found: /missing");
    }

    #[test]
    fn command_failed_display() {
        let err = InheritError::CommandFailed {
            operation: "setfacl",
            path: PathBuf::from("/warehouse/t"),
            code: 1,
        };
        assert_eq!(
            err.to_string(),
            "recursive setfacl exited with code 1 for /warehouse/t"
        );
    }

    #[test]
    fn acls_unsupported_display() {
        let err = InheritError::AclsUnsupported {
            path: PathBuf::from("/mnt/plain"),
        };
        assert!(err.to_string().contains("/mnt/plain"));
    }

    #[test]
    fn from_io_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        assert!(matches!(
            InheritError::from(io_err),
            InheritError::NotFound { .. }
        ));
    }

    #[test]
    fn from_io_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        assert!(matches!(
            InheritError::from(io_err),
            InheritError::PermissionDenied { .. }
        ));
    }

    #[test]
    fn from_io_unsupported() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Unsupported, "test");
        assert!(matches!(
            InheritError::from(io_err),
            InheritError::AclsUnsupported { .. }
        ));
    }

    #[test]
    fn from_io_other() {
        let io_err = std::io::Error::other("test");
        assert!(matches!(InheritError::from(io_err), InheritError::Io { .. }));
    }
}
