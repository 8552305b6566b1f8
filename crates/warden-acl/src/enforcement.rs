//! The enforcement engine.
//!
//! Pure in-memory decision logic over one ACL record's ordered entry
//! collections. Given an existing collection and a requested change, the
//! engine decides whether to insert a new entry, skip a redundant one,
//! delete matching entries, or fall back to an explicit denial. It never
//! touches storage — callers persist the mutated record afterwards.
//!
//! Ordering is precedence: the consuming evaluator takes the first
//! matching entry, so new entries go to the head of the collection.

use warden_core::{AceKind, AclRecord, SecurityIdentity};

use crate::context::PermissionContext;
use crate::policy::DefaultGrants;

/// Applies a permission context to an ACL record.
///
/// Scans the context's kind collection from the highest index to the
/// lowest (most recently inserted first) for an entry matching the
/// context. A match makes this a no-op: the entry already exists and a
/// duplicate would both break the dedup invariant and force a pointless
/// write. Otherwise the context's entry is inserted at the head so it
/// takes precedence over any earlier entry for the same identity.
pub fn apply(acl: &mut AclRecord, context: &PermissionContext) {
    let entries = acl.entries_mut(context.kind());
    if entries.iter().rev().any(|entry| context.matches(entry)) {
        log::debug!("{context}: entry already present, skipping");
        return;
    }
    log::debug!("{context}: inserting at head");
    entries.insert(0, context.to_entry());
}

/// Revokes a permission context from an ACL record.
///
/// Deletes every entry matching the context, walking from the highest
/// index down so removals never shift a not-yet-visited entry. When
/// nothing matched — there was no grant to revoke — an explicit denial is
/// applied instead, so the identity is unambiguously blocked rather than
/// silently falling through to a default or inherited rule.
///
/// Matching stays exact: an identity's entries with a different mask or
/// granting flag are untouched.
pub fn revoke(acl: &mut AclRecord, context: &PermissionContext) {
    let entries = acl.entries_mut(context.kind());
    let mut removed = 0;
    for index in (0..entries.len()).rev() {
        if context.matches(&entries[index]) {
            entries.remove(index);
            removed += 1;
        }
    }

    if removed == 0 {
        log::debug!("{context}: nothing to revoke, materializing denial");
        apply(acl, &context.denying());
    } else {
        log::debug!("{context}: removed {removed} entries");
    }
}

/// Removes every entry of one kind held by an identity.
///
/// A blanket removal, not a targeted revoke: masks and granting flags are
/// ignored and no fallback denial is synthesized. Afterwards any access
/// decision for the identity falls through to defaults or inheritance in
/// the external evaluator.
pub fn revoke_all(acl: &mut AclRecord, identity: &SecurityIdentity, kind: AceKind) {
    let entries = acl.entries_mut(kind);
    let before = entries.len();
    entries.retain(|entry| entry.identity != *identity);
    log::debug!(
        "revoked all {kind} entries for {identity}: removed {}",
        before - entries.len()
    );
}

/// Installs the default class-scoped grants on an ACL record.
///
/// Each context is applied independently through [`apply`], so
/// installation is additive and safe to repeat. Head insertion means the
/// last-applied grant sits nearest the front of the collection when no
/// entries pre-exist.
pub fn install_defaults(acl: &mut AclRecord, defaults: &DefaultGrants) {
    for context in defaults.contexts() {
        apply(acl, &context);
    }
}
