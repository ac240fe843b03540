//! Bulk recursive metadata operations.

use std::path::Path;

use crate::{AclEntry, FileMode, InheritError};

/// Bulk sink applying a metadata change to an entire subtree in one call.
///
/// One method per recursive operation, so the core is not coupled to any
/// particular invocation mechanism. Implementations may walk the tree
/// natively or shell out to a recursive-operations tool; either way a
/// nonzero outcome surfaces as [`InheritError::CommandFailed`].
///
/// [`acl_spec`](crate::acl_spec) produces the comma-joined text operand
/// for implementations that build a `setfacl --set` style command line.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsRecursive`.
pub trait FsRecursive: Send + Sync {
    /// Change the owning group of `path` and everything under it.
    ///
    /// # Errors
    ///
    /// - [`InheritError::CommandFailed`] if the bulk operation reports a
    ///   nonzero exit
    fn recursive_chgrp(&self, path: &Path, group: &str) -> Result<(), InheritError>;

    /// Change the permission bits of `path` and everything under it.
    ///
    /// # Errors
    ///
    /// - [`InheritError::CommandFailed`] if the bulk operation reports a
    ///   nonzero exit
    fn recursive_chmod(&self, path: &Path, mode: FileMode) -> Result<(), InheritError>;

    /// Replace the ACL of `path` and everything under it.
    ///
    /// A failed call commits no partial ACL state, so callers may treat a
    /// failure as "ACLs unavailable here" without cleanup.
    ///
    /// # Errors
    ///
    /// - [`InheritError::AclsUnsupported`] if the filesystem does not
    ///   implement ACLs
    /// - [`InheritError::CommandFailed`] if the bulk operation reports a
    ///   nonzero exit
    fn recursive_set_acl(&self, path: &Path, entries: &[AclEntry]) -> Result<(), InheritError>;
}
