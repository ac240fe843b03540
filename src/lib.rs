//! # acl-inherit
//!
//! Ownership, permission-bit, and POSIX ACL propagation for **pluggable
//! filesystem backends**.
//!
//! A native filesystem makes new children of a directory inherit security
//! metadata automatically; a distributed or virtual filesystem often does
//! not. This crate computes and applies the metadata a programmatically
//! created path should carry, from the permission bits and ACL entry set of
//! a source object (typically the new path's parent).
//!
//! The crate owns no filesystem of its own — backends implement three small
//! collaborator traits and get the whole propagation pipeline on top.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use acl_inherit::{inherit_from_parent, InheritConfig, InheritOptions};
//! use std::path::Path;
//!
//! // `backend` is any type implementing FsStatus + FsApply + FsRecursive.
//! let config = InheritConfig::from_setting(Some("true"));
//! let target = Path::new("/warehouse/sales/part-00000");
//!
//! // After writing the file, make it inherit its parent's metadata.
//! // Application is best-effort; only the parent status read can fail.
//! inherit_from_parent(&backend, &config, target, &InheritOptions::new().target_is_dir(false))?;
//! # Ok::<(), acl_inherit::InheritError>(())
//! ```
//!
//! ---
//!
//! ## Pipeline
//!
//! | Stage | Type / function | Purpose |
//! |-------|-----------------|---------|
//! | Capture | [`PermissionSnapshot::capture`] | One status read plus an optional, soft-failing ACL read |
//! | Derive | [`derive_child_acl`] | Pure DEFAULT→ACCESS inheritance rule |
//! | Apply | [`inherit`] | Direct or recursive application, failures absorbed |
//!
//! The derivation rule, in short: a source's DEFAULT entries become the
//! child's ACCESS entries (OTHER forced to no access), directory targets
//! also inherit the DEFAULT entries verbatim, and sources without ACLs fall
//! back to plain permission bits. See [`derive_child_acl`] for the full
//! rule.
//!
//! ---
//!
//! ## Collaborator Traits
//!
//! | Trait | Concern |
//! |-------|---------|
//! | [`FsStatus`] | Reading status and ACLs of the source |
//! | [`FsApply`] | Setting group, ACL, or permission bits on one object |
//! | [`FsRecursive`] | Bulk group/permission/ACL changes over a subtree |
//! | [`FsInherit`] | All three, via blanket implementation |
//!
//! ---
//!
//! ## Failure Model
//!
//! Inheritance is a courtesy step after a primary file operation and must
//! never abort it:
//!
//! - Failing to read the source's basic status is the only hard error —
//!   without permission bits there is nothing to inherit.
//! - An ACL read or bulk ACL set that fails degrades softly to the
//!   no-ACL path and is logged, so enabling ACL handling never breaks
//!   filesystems without ACL support.
//! - Everything else is caught at the [`inherit`] entry point, logged at
//!   warning level with the target path, and swallowed.
//!
//! Logging uses the [`tracing`] facade; hook up any subscriber you like.
//!
//! ---
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` and take `&self`. Propagation calls
//! hold no shared state beyond the single-owner [`PermissionSnapshot`], so
//! calls for independent targets are safe to run concurrently. Concurrent
//! calls against the *same* target are resolved by the backend's own
//! metadata-operation atomicity; the crate adds no locking or retries.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization for [`AclEntry`], [`FileMode`], [`FileStatus`], etc. |

// Private modules
mod config;
mod derive;
mod error;
mod propagate;
mod snapshot;
mod traits;
mod types;

// Public re-exports - error types
pub use error::InheritError;

// Public re-exports - core types
pub use types::{acl_spec, AclEntry, AclKind, AclScope, FileMode, FileStatus, Rwx};

// Public re-exports - configuration
pub use config::InheritConfig;

// Public re-exports - collaborator traits
pub use traits::{FsApply, FsInherit, FsRecursive, FsStatus};

// Public re-exports - the propagation pipeline
pub use derive::{derive_child_acl, DerivedAcl};
pub use propagate::{inherit, inherit_from, inherit_from_parent, InheritOptions};
pub use snapshot::PermissionSnapshot;
