//! Applying derived metadata to a target path.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::{
    derive_child_acl, DerivedAcl, FsApply, FsInherit, FsRecursive, InheritConfig, InheritError,
    PermissionSnapshot,
};

/// Options controlling how a snapshot is applied to a target.
///
/// # Examples
///
/// ```rust
/// use acl_inherit::InheritOptions;
///
/// let opts = InheritOptions::new().recursive(true).target_group("staff");
/// assert!(opts.recursive);
/// ```
#[derive(Debug, Clone)]
pub struct InheritOptions {
    /// Apply metadata to the entire subtree under the target via the bulk
    /// recursive sink instead of direct single-object calls.
    pub recursive: bool,
    /// Whether the target is a directory. Directories receive the source's
    /// DEFAULT entries so the inheritance chain continues; plain files must
    /// not, or the filesystem rejects the ACL.
    pub target_is_dir: bool,
    /// The target's current owning group, if the caller happens to know it.
    /// When it equals the source group the group-set call is skipped. This
    /// is a best-effort optimization: a stale hint means a skipped set, not
    /// an error, and correctness is only guaranteed when the hint is fresh.
    pub target_group: Option<String>,
}

impl InheritOptions {
    /// Non-recursive options for a directory target.
    pub fn new() -> Self {
        Self {
            recursive: false,
            target_is_dir: true,
            target_group: None,
        }
    }

    /// Set whether application is recursive.
    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set whether the target is a directory.
    #[must_use]
    pub fn target_is_dir(mut self, is_dir: bool) -> Self {
        self.target_is_dir = is_dir;
        self
    }

    /// Supply the target's current group as a skip hint.
    #[must_use]
    pub fn target_group(mut self, group: impl Into<String>) -> Self {
        self.target_group = Some(group.into());
        self
    }
}

impl Default for InheritOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a source snapshot to a target path, best-effort.
///
/// Derives the child metadata from the snapshot and applies it through the
/// single-object sink, or through the bulk recursive sink when
/// [`InheritOptions::recursive`] is set.
///
/// Never fails: metadata inheritance is a courtesy step after a caller's
/// primary file operation, so every error is logged at warning level with
/// the target path and swallowed. The only observable symptom of failure is
/// the log line and target metadata that differs from the source's.
pub fn inherit<F>(fs: &F, snapshot: &PermissionSnapshot, target: &Path, options: &InheritOptions)
where
    F: FsApply + FsRecursive + ?Sized,
{
    if let Err(err) = try_inherit(fs, snapshot, target, options) {
        warn!(
            path = %target.display(),
            error = %err,
            "unable to inherit permissions onto target"
        );
        debug!(path = %target.display(), ?err, "inheritance failure detail");
    }
}

/// Capture `source` and apply it to `target`.
///
/// # Errors
///
/// Fails only when the snapshot of `source` cannot be built (its basic
/// status read fails). Application itself is best-effort, as with
/// [`inherit`].
pub fn inherit_from<F: FsInherit + ?Sized>(
    fs: &F,
    config: &InheritConfig,
    source: &Path,
    target: &Path,
    options: &InheritOptions,
) -> Result<(), InheritError> {
    let snapshot = PermissionSnapshot::capture(fs, source, config)?;
    inherit(fs, &snapshot, target, options);
    Ok(())
}

/// Capture the parent of `target` and apply it to `target`.
///
/// The usual entry point for programmatically created paths: a new object
/// under a managed hierarchy inherits the security metadata of the
/// directory it was created in, matching what a native filesystem does
/// automatically.
///
/// # Errors
///
/// - [`InheritError::NoParent`] if `target` has no parent path
/// - Any error from the parent's snapshot capture
pub fn inherit_from_parent<F: FsInherit + ?Sized>(
    fs: &F,
    config: &InheritConfig,
    target: &Path,
    options: &InheritOptions,
) -> Result<(), InheritError> {
    let parent = target.parent().ok_or_else(|| InheritError::NoParent {
        path: target.to_path_buf(),
    })?;
    inherit_from(fs, config, parent, target, options)
}

fn try_inherit<F>(
    fs: &F,
    snapshot: &PermissionSnapshot,
    target: &Path,
    options: &InheritOptions,
) -> Result<(), InheritError>
where
    F: FsApply + FsRecursive + ?Sized,
{
    let derived = derive_child_acl(snapshot, options.target_is_dir);

    if options.recursive {
        apply_recursive(fs, snapshot, &derived, target)
    } else {
        apply_direct(fs, snapshot, &derived, target, options.target_group.as_deref())
    }
}

fn apply_direct<F: FsApply + ?Sized>(
    fs: &F,
    snapshot: &PermissionSnapshot,
    derived: &DerivedAcl,
    target: &Path,
    target_group: Option<&str>,
) -> Result<(), InheritError> {
    if let Some(group) = snapshot.group() {
        // Skip the set when the hint already matches the source group.
        if target_group != Some(group) {
            fs.set_group(target, group)?;
        }
    }

    match derived {
        DerivedAcl::Entries(entries) => fs.set_acl(target, entries),
        DerivedAcl::ModeOnly(mode) => fs.set_permission(target, *mode),
    }
}

fn apply_recursive<F: FsRecursive + ?Sized>(
    fs: &F,
    snapshot: &PermissionSnapshot,
    derived: &DerivedAcl,
    target: &Path,
) -> Result<(), InheritError> {
    if let Some(group) = snapshot.group() {
        fs.recursive_chgrp(target, group)?;
    }

    match derived {
        DerivedAcl::Entries(entries) => {
            // A failed bulk ACL set commits no partial state, so the group
            // change above stands and no permission-bit retry is needed.
            if let Err(err) = fs.recursive_set_acl(target, entries) {
                info!(
                    path = %target.display(),
                    "skipping ACL inheritance: filesystem for target does not \
                     support ACLs but ACL handling is enabled in configuration"
                );
                debug!(path = %target.display(), error = %err, "recursive ACL set failed");
            }
            Ok(())
        }
        DerivedAcl::ModeOnly(mode) => fs.recursive_chmod(target, *mode),
    }
}
