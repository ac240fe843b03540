//! Capturing a source object's security metadata.

use std::path::Path;

use tracing::{info, trace};

use crate::{AclEntry, FileMode, FsStatus, InheritConfig, InheritError};

/// An immutable capture of a source object's permission bits, owning group,
/// and (when ACL handling is enabled) full ACL entry list.
///
/// Built once per propagation request via [`capture`](Self::capture) and
/// discarded after use. The basic status read is mandatory; the ACL read is
/// best-effort, so enabling ACL handling in configuration never breaks
/// filesystems that do not implement ACLs.
#[derive(Debug, Clone)]
pub struct PermissionSnapshot {
    mode: FileMode,
    group: Option<String>,
    acl_entries: Option<Vec<AclEntry>>,
}

impl PermissionSnapshot {
    /// Build a snapshot from already-known metadata.
    ///
    /// For callers that obtained the source's status through their own
    /// channel. An empty group string or an empty entry list is normalized
    /// to `None`.
    pub fn new(mode: FileMode, group: Option<String>, acl_entries: Option<Vec<AclEntry>>) -> Self {
        Self {
            mode,
            group: group.filter(|g| !g.is_empty()),
            acl_entries: acl_entries.filter(|entries| !entries.is_empty()),
        }
    }

    /// Capture the metadata of `path` from a filesystem backend.
    ///
    /// The status read is a hard requirement. The ACL read is attempted only
    /// when `config` enables ACL handling, and degrades softly: a filesystem
    /// that does not implement ACLs (or any other ACL read failure) yields a
    /// snapshot without entries rather than an error.
    ///
    /// # Errors
    ///
    /// Fails only when the basic status read fails; without permission bits
    /// and group there is nothing to inherit.
    pub fn capture<F: FsStatus + ?Sized>(
        fs: &F,
        path: &Path,
        config: &InheritConfig,
    ) -> Result<Self, InheritError> {
        let status = fs.status(path)?;

        let acl_entries = if config.acl_enabled() {
            match fs.acl_status(path) {
                Ok(entries) => {
                    trace!(path = %path.display(), acl = %crate::acl_spec(&entries), "source ACL status");
                    Some(entries)
                }
                Err(InheritError::AclsUnsupported { .. }) => {
                    info!(
                        path = %path.display(),
                        "skipping ACL inheritance: filesystem does not support ACLs \
                         but ACL handling is enabled in configuration"
                    );
                    None
                }
                Err(err) => {
                    info!(path = %path.display(), error = %err, "skipping ACL inheritance: ACL status unavailable");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self::new(status.mode, status.group, acl_entries))
    }

    /// The source's basic permission bits.
    #[inline]
    pub const fn mode(&self) -> FileMode {
        self.mode
    }

    /// The source's owning group. `None` when the filesystem reports no
    /// group (or an empty one); group propagation is skipped in that case.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// The source's ACL entries, or `None` when ACL handling is disabled,
    /// the filesystem does not support ACLs, or the source has none.
    pub fn acl_entries(&self) -> Option<&[AclEntry]> {
        self.acl_entries.as_deref()
    }
}
