//! # Collaborator Traits
//!
//! The filesystem interfaces the propagation core calls into.
//!
//! The core owns no metadata storage or transport of its own; everything it
//! reads or writes goes through one of three traits, each covering one
//! concern:
//!
//! | Trait | Concern | Methods |
//! |-------|---------|---------|
//! | [`FsStatus`] | Metadata source | `status`, `acl_status` |
//! | [`FsApply`] | Single-object sink | `set_group`, `set_acl`, `set_permission` |
//! | [`FsRecursive`] | Bulk subtree sink | `recursive_chgrp`, `recursive_chmod`, `recursive_set_acl` |
//!
//! [`FsInherit`] combines all three and has a blanket implementation:
//! implement the component traits and the composite comes for free.
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync`. Methods take `&self` to enable
//! concurrent propagation calls; backends use interior mutability for any
//! state they keep.
//!
//! ## Object Safety
//!
//! All traits are object-safe and can be used as trait objects.

mod fs_apply;
mod fs_recursive;
mod fs_status;

pub use fs_apply::FsApply;
pub use fs_recursive::FsRecursive;
pub use fs_status::FsStatus;

/// A backend capable of full metadata inheritance.
///
/// Combines the metadata source ([`FsStatus`]), the single-object sink
/// ([`FsApply`]), and the bulk recursive sink ([`FsRecursive`]). The
/// end-to-end entry points [`inherit_from`](crate::inherit_from) and
/// [`inherit_from_parent`](crate::inherit_from_parent) are generic over
/// this trait.
///
/// # Blanket Implementation
///
/// Automatically implemented for any type implementing all three component
/// traits. You never need to implement `FsInherit` directly.
pub trait FsInherit: FsStatus + FsApply + FsRecursive {}

// Blanket implementation
impl<T: FsStatus + FsApply + FsRecursive> FsInherit for T {}
