//! Single-object metadata write operations.

use std::path::Path;

use crate::{AclEntry, FileMode, InheritError};

/// Metadata sink for a single object: the direct write side of a backend.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsApply`.
pub trait FsApply: Send + Sync {
    /// Set the owning group of a path.
    ///
    /// # Errors
    ///
    /// - [`InheritError::NotFound`] if the path does not exist
    /// - [`InheritError::PermissionDenied`] if the caller may not change
    ///   ownership
    fn set_group(&self, path: &Path, group: &str) -> Result<(), InheritError>;

    /// Replace the ACL of a path with the given entries.
    ///
    /// DEFAULT-scope entries are only valid on directories; backends reject
    /// them on plain files.
    ///
    /// # Errors
    ///
    /// - [`InheritError::AclsUnsupported`] if the filesystem does not
    ///   implement ACLs
    /// - [`InheritError::NotFound`] if the path does not exist
    fn set_acl(&self, path: &Path, entries: &[AclEntry]) -> Result<(), InheritError>;

    /// Set the basic permission bits of a path.
    ///
    /// # Errors
    ///
    /// - [`InheritError::NotFound`] if the path does not exist
    fn set_permission(&self, path: &Path, mode: FileMode) -> Result<(), InheritError>;
}
