//! Deriving the metadata a new child object should carry.

use crate::{AclEntry, AclKind, AclScope, FileMode, PermissionSnapshot, Rwx};

/// The metadata to apply to a child object, as computed by
/// [`derive_child_acl`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivedAcl {
    /// Apply this ACL entry set.
    Entries(Vec<AclEntry>),
    /// No ACLs apply; set plain permission bits.
    ModeOnly(FileMode),
}

/// Compute the ACL entry set (or fallback permission bits) a child of the
/// snapshotted source should carry.
///
/// Pure computation, deterministic for a given input: the result preserves
/// the construction order below, so repeated calls serialize to identical
/// bulk-apply operands.
///
/// The inheritance rule:
///
/// 1. A source without ACL entries yields [`DerivedAcl::ModeOnly`] with the
///    source's basic permission bits.
/// 2. When the source carries DEFAULT entries, every DEFAULT entry becomes
///    an ACCESS entry with the same kind, name, and permission — except
///    OTHER, which is forced to no access. New children never gain blanket
///    OTHER access purely through default-ACL inheritance.
/// 3. Directory targets additionally receive the source's DEFAULT entries
///    verbatim, continuing the chain for their own descendants. Plain files
///    never receive DEFAULT entries; filesystems reject them.
/// 4. A source with ACL entries but no DEFAULT block (extended named
///    entries only) yields a minimal ACCESS set: USER from the mode's owner
///    bits, GROUP from the first ACCESS-scope GROUP entry (falling back to
///    the mode's group bits when there is none), and OTHER with no access.
///
/// # Examples
///
/// ```rust
/// use acl_inherit::{
///     derive_child_acl, AclEntry, AclKind, AclScope, DerivedAcl, FileMode,
///     PermissionSnapshot, Rwx,
/// };
///
/// let snapshot = PermissionSnapshot::new(
///     FileMode::from_mode(0o750),
///     Some("etl".into()),
///     Some(vec![
///         AclEntry::new(AclScope::Default, AclKind::User, Rwx::ALL),
///         AclEntry::new(AclScope::Default, AclKind::Other, Rwx::READ),
///     ]),
/// );
///
/// let DerivedAcl::Entries(entries) = derive_child_acl(&snapshot, false) else {
///     unreachable!();
/// };
/// // OTHER is never inherited; file targets get no DEFAULT entries.
/// assert_eq!(entries, vec![
///     AclEntry::new(AclScope::Access, AclKind::User, Rwx::ALL),
///     AclEntry::new(AclScope::Access, AclKind::Other, Rwx::NONE),
/// ]);
/// ```
pub fn derive_child_acl(snapshot: &PermissionSnapshot, target_is_dir: bool) -> DerivedAcl {
    let Some(source) = snapshot.acl_entries() else {
        return DerivedAcl::ModeOnly(snapshot.mode());
    };

    let defaults: Vec<&AclEntry> = source
        .iter()
        .filter(|entry| entry.scope == AclScope::Default)
        .collect();

    if defaults.is_empty() {
        // No DEFAULT block to inherit from; reduce to basic permissions.
        let group = source
            .iter()
            .find(|entry| entry.scope == AclScope::Access && entry.kind == AclKind::Group)
            .map(|entry| entry.perm)
            .unwrap_or_else(|| snapshot.mode().group());

        return DerivedAcl::Entries(vec![
            AclEntry::new(AclScope::Access, AclKind::User, snapshot.mode().user()),
            AclEntry::new(AclScope::Access, AclKind::Group, group),
            AclEntry::new(AclScope::Access, AclKind::Other, Rwx::NONE),
        ]);
    }

    let mut entries = Vec::with_capacity(defaults.len() * 2);

    // Every ACCESS entry of the child comes from a DEFAULT entry of the
    // source; a well-formed DEFAULT block includes USER, GROUP, and OTHER.
    for default in &defaults {
        if default.kind == AclKind::Other {
            entries.push(AclEntry::new(AclScope::Access, AclKind::Other, Rwx::NONE));
        } else {
            entries.push(AclEntry {
                scope: AclScope::Access,
                kind: default.kind,
                name: default.name.clone(),
                perm: default.perm,
            });
        }
    }

    if target_is_dir {
        entries.extend(defaults.into_iter().cloned());
    }

    DerivedAcl::Entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn access(kind: AclKind, perm: Rwx) -> AclEntry {
        AclEntry::new(AclScope::Access, kind, perm)
    }

    fn default(kind: AclKind, perm: Rwx) -> AclEntry {
        AclEntry::new(AclScope::Default, kind, perm)
    }

    fn snapshot(mode: u32, entries: Option<Vec<AclEntry>>) -> PermissionSnapshot {
        PermissionSnapshot::new(FileMode::from_mode(mode), Some("etl".into()), entries)
    }

    #[test]
    fn no_entries_falls_back_to_mode() {
        let snap = snapshot(0o640, None);
        assert_eq!(
            derive_child_acl(&snap, true),
            DerivedAcl::ModeOnly(FileMode::from_mode(0o640))
        );
    }

    #[test]
    fn defaults_become_access_entries_for_directory() {
        let snap = snapshot(
            0o750,
            Some(vec![
                default(AclKind::User, Rwx::ALL),
                default(AclKind::Group, Rwx::READ_EXECUTE),
                default(AclKind::Other, Rwx::READ),
            ]),
        );
        let DerivedAcl::Entries(entries) = derive_child_acl(&snap, true) else {
            panic!("expected entries");
        };
        assert_eq!(
            entries,
            vec![
                access(AclKind::User, Rwx::ALL),
                access(AclKind::Group, Rwx::READ_EXECUTE),
                access(AclKind::Other, Rwx::NONE),
                default(AclKind::User, Rwx::ALL),
                default(AclKind::Group, Rwx::READ_EXECUTE),
                default(AclKind::Other, Rwx::READ),
            ]
        );
    }

    #[test]
    fn file_target_gets_no_default_entries() {
        let snap = snapshot(
            0o750,
            Some(vec![
                default(AclKind::User, Rwx::ALL),
                default(AclKind::Other, Rwx::READ),
            ]),
        );
        let DerivedAcl::Entries(entries) = derive_child_acl(&snap, false) else {
            panic!("expected entries");
        };
        assert!(entries.iter().all(|e| e.scope == AclScope::Access));
    }

    #[test]
    fn other_is_never_inherited() {
        // Even a wide-open DEFAULT:OTHER produces no OTHER access.
        let snap = snapshot(0o777, Some(vec![default(AclKind::Other, Rwx::ALL)]));
        let DerivedAcl::Entries(entries) = derive_child_acl(&snap, true) else {
            panic!("expected entries");
        };
        assert_eq!(entries[0], access(AclKind::Other, Rwx::NONE));
    }

    #[test]
    fn named_defaults_are_copied_with_their_names() {
        let named = AclEntry::named(AclScope::Default, AclKind::User, "alice", Rwx::READ_WRITE);
        let snap = snapshot(0o750, Some(vec![named.clone()]));
        let DerivedAcl::Entries(entries) = derive_child_acl(&snap, true) else {
            panic!("expected entries");
        };
        assert_eq!(
            entries,
            vec![
                AclEntry::named(AclScope::Access, AclKind::User, "alice", Rwx::READ_WRITE),
                named,
            ]
        );
    }

    #[test]
    fn mask_defaults_flow_through_unchanged() {
        let snap = snapshot(
            0o750,
            Some(vec![default(AclKind::Mask, Rwx::READ_EXECUTE)]),
        );
        let DerivedAcl::Entries(entries) = derive_child_acl(&snap, false) else {
            panic!("expected entries");
        };
        assert_eq!(entries, vec![access(AclKind::Mask, Rwx::READ_EXECUTE)]);
    }

    #[test]
    fn no_defaults_uses_access_group_entry() {
        let snap = snapshot(
            0o640,
            Some(vec![
                access(AclKind::User, Rwx::READ_WRITE),
                access(AclKind::Group, Rwx::READ),
            ]),
        );
        let DerivedAcl::Entries(entries) = derive_child_acl(&snap, false) else {
            panic!("expected entries");
        };
        assert_eq!(
            entries,
            vec![
                access(AclKind::User, Rwx::READ_WRITE),
                access(AclKind::Group, Rwx::READ),
                access(AclKind::Other, Rwx::NONE),
            ]
        );
    }

    #[test]
    fn no_defaults_no_group_entry_uses_mode_group_bits() {
        let snap = snapshot(
            0o640,
            Some(vec![AclEntry::named(
                AclScope::Access,
                AclKind::User,
                "bob",
                Rwx::READ,
            )]),
        );
        let DerivedAcl::Entries(entries) = derive_child_acl(&snap, false) else {
            panic!("expected entries");
        };
        assert_eq!(entries[1], access(AclKind::Group, Rwx::READ));
    }

    #[test]
    fn derivation_is_deterministic() {
        let snap = snapshot(
            0o750,
            Some(vec![
                default(AclKind::User, Rwx::ALL),
                default(AclKind::Group, Rwx::READ_EXECUTE),
                default(AclKind::Mask, Rwx::ALL),
                default(AclKind::Other, Rwx::NONE),
            ]),
        );
        assert_eq!(derive_child_acl(&snap, true), derive_child_acl(&snap, true));
    }
}
