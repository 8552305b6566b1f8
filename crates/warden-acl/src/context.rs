//! Permission contexts.
//!
//! A [`PermissionContext`] is the transient value describing one requested
//! permission change: which kind partition to touch, for which identity,
//! with which exact mask, granting or denying. Its equality rule against an
//! [`AccessControlEntry`] — same identity AND same mask AND same granting
//! flag — is the *sole* matching rule driving dedup, skip-if-exists, and
//! revoke matching in the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use warden_core::{AccessControlEntry, AceKind, PermissionMask, SecurityIdentity};

/// A requested permission change against one ACL record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionContext {
    kind: AceKind,
    identity: SecurityIdentity,
    mask: PermissionMask,
    granting: bool,
}

impl PermissionContext {
    /// Creates a granting context.
    pub fn grant(kind: AceKind, identity: SecurityIdentity, mask: PermissionMask) -> Self {
        Self {
            kind,
            identity,
            mask,
            granting: true,
        }
    }

    /// Creates an explicitly denying context.
    pub fn deny(kind: AceKind, identity: SecurityIdentity, mask: PermissionMask) -> Self {
        Self {
            kind,
            identity,
            mask,
            granting: false,
        }
    }

    /// The kind partition this context operates on.
    pub fn kind(&self) -> AceKind {
        self.kind
    }

    /// The identity the change applies to.
    pub fn identity(&self) -> &SecurityIdentity {
        &self.identity
    }

    /// The exact mask requested.
    pub fn mask(&self) -> PermissionMask {
        self.mask
    }

    /// Whether the context grants (`true`) or denies (`false`).
    pub fn granting(&self) -> bool {
        self.granting
    }

    /// A copy of this context with `granting` forced to `false`.
    ///
    /// Used by revocation to materialize an explicit denial when no
    /// matching grant existed.
    pub fn denying(&self) -> Self {
        Self {
            granting: false,
            ..self.clone()
        }
    }

    /// Context equality against an existing entry: same identity, same
    /// mask, same granting flag. Kind is implicit — the entry comes from
    /// the collection this context's kind selects.
    pub fn matches(&self, entry: &AccessControlEntry) -> bool {
        self.identity == entry.identity
            && self.mask == entry.mask
            && self.granting == entry.granting
    }

    /// Builds the entry this context inserts.
    pub fn to_entry(&self) -> AccessControlEntry {
        AccessControlEntry::new(self.identity.clone(), self.mask, self.granting)
    }
}

impl fmt::Display for PermissionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.granting { "grant" } else { "deny" };
        write!(
            f,
            "{verb} {} to {} ({} scope)",
            self.mask, self.identity, self.kind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> SecurityIdentity {
        SecurityIdentity::role("editor")
    }

    #[test]
    fn test_matches_requires_all_three() {
        let context = PermissionContext::grant(AceKind::Object, editor(), PermissionMask::VIEW);

        let exact = AccessControlEntry::new(editor(), PermissionMask::VIEW, true);
        assert!(context.matches(&exact));

        let other_identity =
            AccessControlEntry::new(SecurityIdentity::role("viewer"), PermissionMask::VIEW, true);
        assert!(!context.matches(&other_identity));

        let other_mask = AccessControlEntry::new(editor(), PermissionMask::EDIT, true);
        assert!(!context.matches(&other_mask));

        let other_granting = AccessControlEntry::new(editor(), PermissionMask::VIEW, false);
        assert!(!context.matches(&other_granting));
    }

    #[test]
    fn test_no_subset_matching() {
        let context = PermissionContext::grant(AceKind::Object, editor(), PermissionMask::VIEW);
        let broader = AccessControlEntry::new(
            editor(),
            PermissionMask::VIEW | PermissionMask::EDIT,
            true,
        );
        // Exact equality only: a broader entry is not a match.
        assert!(!context.matches(&broader));
    }

    #[test]
    fn test_denying_flips_only_the_flag() {
        let context = PermissionContext::grant(AceKind::Class, editor(), PermissionMask::EDIT);
        let denial = context.denying();

        assert!(!denial.granting());
        assert_eq!(denial.kind(), context.kind());
        assert_eq!(denial.identity(), context.identity());
        assert_eq!(denial.mask(), context.mask());
    }

    #[test]
    fn test_to_entry() {
        let context = PermissionContext::deny(AceKind::Object, editor(), PermissionMask::DELETE);
        let entry = context.to_entry();
        assert!(context.matches(&entry));
        assert!(!entry.granting);
    }

    #[test]
    fn test_display() {
        let context = PermissionContext::grant(AceKind::Object, editor(), PermissionMask::VIEW);
        assert_eq!(
            context.to_string(),
            "grant VIEW to role:editor (object scope)"
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let context = PermissionContext::deny(AceKind::Class, editor(), PermissionMask::MASTER);
        let json = serde_json::to_string(&context).unwrap();
        let parsed: PermissionContext = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, context);
    }
}
