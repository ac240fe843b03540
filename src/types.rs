//! Core types for ACL and permission propagation.

use std::fmt;

/// A read/write/execute permission triple.
///
/// Stored as the low three bits of a byte (`r = 4`, `w = 2`, `x = 1`),
/// matching one digit of an octal Unix mode. Renders in the symbolic
/// form used by POSIX ACL text:
///
/// ```rust
/// use acl_inherit::Rwx;
///
/// assert_eq!(Rwx::READ_WRITE.to_string(), "rw-");
/// assert_eq!(Rwx::NONE.to_string(), "---");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rwx(u8);

impl Rwx {
    /// No access.
    pub const NONE: Self = Self(0);
    /// Execute only.
    pub const EXECUTE: Self = Self(1);
    /// Write only.
    pub const WRITE: Self = Self(2);
    /// Write and execute.
    pub const WRITE_EXECUTE: Self = Self(3);
    /// Read only.
    pub const READ: Self = Self(4);
    /// Read and execute.
    pub const READ_EXECUTE: Self = Self(5);
    /// Read and write.
    pub const READ_WRITE: Self = Self(6);
    /// Full access.
    pub const ALL: Self = Self(7);

    /// Create from the low three bits of an octal mode digit.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0o7)
    }

    /// Get the raw bits (0..=7).
    #[inline]
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Returns `true` if read access is granted.
    #[inline]
    pub const fn can_read(&self) -> bool {
        self.0 & 0o4 != 0
    }

    /// Returns `true` if write access is granted.
    #[inline]
    pub const fn can_write(&self) -> bool {
        self.0 & 0o2 != 0
    }

    /// Returns `true` if execute access is granted.
    #[inline]
    pub const fn can_execute(&self) -> bool {
        self.0 & 0o1 != 0
    }
}

impl fmt::Display for Rwx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            if self.can_read() { 'r' } else { '-' },
            if self.can_write() { 'w' } else { '-' },
            if self.can_execute() { 'x' } else { '-' },
        )
    }
}

/// Unix-style permission bits stored as a mode bitmask.
///
/// Holds the owner/group/other rwx triples plus the setuid, setgid, and
/// sticky bits (anything above `0o7777` is masked off on construction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileMode(u32);

impl FileMode {
    /// Create a mode from a Unix mode value (e.g., 0o755).
    #[inline]
    pub const fn from_mode(mode: u32) -> Self {
        Self(mode & 0o7777)
    }

    /// Get the raw mode value.
    #[inline]
    pub const fn mode(&self) -> u32 {
        self.0
    }

    /// The owner's rwx triple.
    #[inline]
    pub const fn user(&self) -> Rwx {
        Rwx::from_bits((self.0 >> 6) as u8)
    }

    /// The group's rwx triple.
    #[inline]
    pub const fn group(&self) -> Rwx {
        Rwx::from_bits((self.0 >> 3) as u8)
    }

    /// The rwx triple for everyone else.
    #[inline]
    pub const fn other(&self) -> Rwx {
        Rwx::from_bits(self.0 as u8)
    }

    /// The octal text form a recursive chmod operation takes (e.g., `"644"`).
    pub fn octal(&self) -> String {
        format!("{:o}", self.0)
    }
}

/// Whether an ACL entry applies to the object itself or is inherited by
/// new children of a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AclScope {
    /// Applies to the object now.
    Access,
    /// Attached to a directory, inherited by newly created children.
    Default,
}

/// The principal class an ACL entry grants access to.
///
/// Named principals (a specific user or group rather than the owning one)
/// are expressed by pairing `User`/`Group` with a name on [`AclEntry`],
/// the same factoring as POSIX ACL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AclKind {
    /// The owning user, or a named user.
    User,
    /// The owning group, or a named group.
    Group,
    /// The mask bounding the effective permissions of group-class entries.
    Mask,
    /// Everyone else.
    Other,
}

impl AclKind {
    /// The tag used in POSIX ACL text form.
    pub const fn tag(&self) -> &'static str {
        match self {
            AclKind::User => "user",
            AclKind::Group => "group",
            AclKind::Mask => "mask",
            AclKind::Other => "other",
        }
    }
}

/// A single ACL entry.
///
/// Immutable value; ordering among entries in a list is preserved so that
/// serialization into a bulk-apply command is deterministic.
///
/// Renders in standard POSIX ACL text form:
///
/// ```rust
/// use acl_inherit::{AclEntry, AclKind, AclScope, Rwx};
///
/// let owner = AclEntry::new(AclScope::Access, AclKind::User, Rwx::READ_WRITE);
/// assert_eq!(owner.to_string(), "user::rw-");
///
/// let named = AclEntry::named(AclScope::Default, AclKind::Group, "staff", Rwx::READ_EXECUTE);
/// assert_eq!(named.to_string(), "default:group:staff:r-x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AclEntry {
    /// ACCESS or DEFAULT scope.
    pub scope: AclScope,
    /// The principal class.
    pub kind: AclKind,
    /// Principal name; `None` for the unnamed owning user/group/other entry.
    pub name: Option<String>,
    /// Granted permissions.
    pub perm: Rwx,
}

impl AclEntry {
    /// Create an unnamed entry.
    pub const fn new(scope: AclScope, kind: AclKind, perm: Rwx) -> Self {
        Self {
            scope,
            kind,
            name: None,
            perm,
        }
    }

    /// Create a named entry for a specific user or group.
    pub fn named(scope: AclScope, kind: AclKind, name: impl Into<String>, perm: Rwx) -> Self {
        Self {
            scope,
            kind,
            name: Some(name.into()),
            perm,
        }
    }
}

impl fmt::Display for AclEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scope == AclScope::Default {
            f.write_str("default:")?;
        }
        write!(
            f,
            "{}:{}:{}",
            self.kind.tag(),
            self.name.as_deref().unwrap_or(""),
            self.perm,
        )
    }
}

/// Serialize entries into the comma-joined text form a bulk ACL-set
/// operation takes (the operand of `setfacl --set`).
///
/// Preserves the order of `entries`, so equal inputs always produce equal
/// command operands.
pub fn acl_spec(entries: &[AclEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&entry.to_string());
    }
    out
}

/// The result of a status read on a filesystem object.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileStatus {
    /// Permission bits.
    pub mode: FileMode,
    /// Owning group, if the filesystem reports one.
    pub group: Option<String>,
    /// Whether the object is a directory.
    pub is_dir: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rwx_bits_round_trip() {
        for bits in 0..8 {
            assert_eq!(Rwx::from_bits(bits).bits(), bits);
        }
    }

    #[test]
    fn rwx_from_bits_masks_extra_bits() {
        assert_eq!(Rwx::from_bits(0o17), Rwx::ALL);
    }

    #[test]
    fn rwx_display() {
        assert_eq!(Rwx::NONE.to_string(), "---");
        assert_eq!(Rwx::READ.to_string(), "r--");
        assert_eq!(Rwx::READ_WRITE.to_string(), "rw-");
        assert_eq!(Rwx::READ_EXECUTE.to_string(), "r-x");
        assert_eq!(Rwx::ALL.to_string(), "rwx");
    }

    #[test]
    fn file_mode_triples() {
        let mode = FileMode::from_mode(0o750);
        assert_eq!(mode.user(), Rwx::ALL);
        assert_eq!(mode.group(), Rwx::READ_EXECUTE);
        assert_eq!(mode.other(), Rwx::NONE);
    }

    #[test]
    fn file_mode_masks_file_type_bits() {
        assert_eq!(FileMode::from_mode(0o100644).mode(), 0o644);
    }

    #[test]
    fn file_mode_octal() {
        assert_eq!(FileMode::from_mode(0o644).octal(), "644");
        assert_eq!(FileMode::from_mode(0o1777).octal(), "1777");
    }

    #[test]
    fn acl_entry_display_unnamed() {
        let entry = AclEntry::new(AclScope::Access, AclKind::Group, Rwx::READ_EXECUTE);
        assert_eq!(entry.to_string(), "group::r-x");
    }

    #[test]
    fn acl_entry_display_named_default() {
        let entry = AclEntry::named(AclScope::Default, AclKind::User, "alice", Rwx::ALL);
        assert_eq!(entry.to_string(), "default:user:alice:rwx");
    }

    #[test]
    fn acl_spec_joins_in_order() {
        let entries = vec![
            AclEntry::new(AclScope::Access, AclKind::User, Rwx::ALL),
            AclEntry::new(AclScope::Access, AclKind::Group, Rwx::READ_EXECUTE),
            AclEntry::new(AclScope::Access, AclKind::Other, Rwx::NONE),
        ];
        assert_eq!(acl_spec(&entries), "user::rwx,group::r-x,other::---");
    }

    #[test]
    fn acl_spec_empty() {
        assert_eq!(acl_spec(&[]), "");
    }

    #[test]
    fn acl_spec_is_deterministic() {
        let entries = vec![
            AclEntry::named(AclScope::Default, AclKind::Group, "staff", Rwx::READ),
            AclEntry::new(AclScope::Access, AclKind::Mask, Rwx::ALL),
        ];
        assert_eq!(acl_spec(&entries), acl_spec(&entries.clone()));
    }

    #[test]
    fn types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Rwx>();
        assert_send_sync::<FileMode>();
        assert_send_sync::<AclScope>();
        assert_send_sync::<AclKind>();
        assert_send_sync::<AclEntry>();
        assert_send_sync::<FileStatus>();
    }
}
