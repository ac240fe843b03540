//! Metadata read operations.

use std::path::Path;

use crate::{AclEntry, FileStatus, InheritError};

/// Metadata source: the read side of a filesystem backend.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsStatus`.
pub trait FsStatus: Send + Sync {
    /// Read permission bits, owning group, and object kind for a path.
    ///
    /// # Errors
    ///
    /// - [`InheritError::NotFound`] if the path does not exist
    /// - [`InheritError::PermissionDenied`] if the status read is denied
    fn status(&self, path: &Path) -> Result<FileStatus, InheritError>;

    /// Read the full ACL entry list for a path, in filesystem order.
    ///
    /// Returns an empty list for objects with only a minimal (bits-derived)
    /// ACL, at the backend's discretion.
    ///
    /// # Errors
    ///
    /// - [`InheritError::AclsUnsupported`] if the filesystem does not
    ///   implement ACLs
    /// - [`InheritError::NotFound`] if the path does not exist
    fn acl_status(&self, path: &Path) -> Result<Vec<AclEntry>, InheritError>;
}
