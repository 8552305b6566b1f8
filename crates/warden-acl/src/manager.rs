//! The ACL orchestrator.
//!
//! [`AclManager`] drives the enforcement engine against a specific domain
//! object: each operation resolves the object to its identity key, loads
//! or creates the ACL record through the store, mutates the in-memory
//! record, and persists it — one load → mutate → persist unit with no
//! engine-side locking. The store serializes concurrent persists of the
//! same object's record.

use std::collections::HashMap;

use warden_core::{AceKind, AclRecord, ObjectIdentity, PermissionMask, Protected};
use warden_store::AclStore;

use crate::context::PermissionContext;
use crate::enforcement;
use crate::error::Result;
use crate::policy::DefaultGrants;
use crate::resolve::{Principal, resolve};

/// Orchestrates permission changes on protected domain objects.
#[derive(Debug)]
pub struct AclManager<S> {
    store: S,
    defaults: DefaultGrants,
}

impl<S: AclStore> AclManager<S> {
    /// Creates a manager over a store, with the standard default grants.
    pub fn new(store: S) -> Self {
        Self {
            store,
            defaults: DefaultGrants::default(),
        }
    }

    /// Creates a manager with a custom default-grants policy.
    pub fn with_defaults(store: S, defaults: DefaultGrants) -> Self {
        Self { store, defaults }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The default-grants policy used by [`install_defaults`](Self::install_defaults).
    pub fn defaults(&self) -> &DefaultGrants {
        &self.defaults
    }

    /// Grants `mask` to `principal` on `object`.
    ///
    /// Idempotent: re-granting an existing (identity, mask) pair leaves
    /// the record unchanged.
    pub async fn add_permission<O, P>(
        &self,
        object: &O,
        principal: P,
        mask: PermissionMask,
        kind: AceKind,
    ) -> Result<()>
    where
        O: Protected,
        P: Into<Principal>,
    {
        let identity = resolve(principal.into())?;
        let object = object.object_identity();
        log::debug!("add permission {mask} for {identity} on {object}");

        let mut acl = self.store.create_or_find(&object).await?;
        let context = PermissionContext::grant(kind, identity, mask);
        enforcement::apply(&mut acl, &context);
        self.store.persist(&acl).await?;
        Ok(())
    }

    /// Revokes `mask` from `principal` on `object`.
    ///
    /// When no matching grant exists, an explicit denial is materialized
    /// instead, so the identity is unambiguously blocked.
    pub async fn revoke_permission<O, P>(
        &self,
        object: &O,
        principal: P,
        mask: PermissionMask,
        kind: AceKind,
    ) -> Result<()>
    where
        O: Protected,
        P: Into<Principal>,
    {
        let identity = resolve(principal.into())?;
        let object = object.object_identity();
        log::debug!("revoke permission {mask} for {identity} on {object}");

        let mut acl = self.store.create_or_find(&object).await?;
        let context = PermissionContext::grant(kind, identity, mask);
        enforcement::revoke(&mut acl, &context);
        self.store.persist(&acl).await?;
        Ok(())
    }

    /// Removes every entry of `kind` held by `principal` on `object`.
    ///
    /// A blanket removal: no fallback denial; access decisions for the
    /// identity fall through to defaults or inheritance.
    pub async fn revoke_all_permissions<O, P>(
        &self,
        object: &O,
        principal: P,
        kind: AceKind,
    ) -> Result<()>
    where
        O: Protected,
        P: Into<Principal>,
    {
        let identity = resolve(principal.into())?;
        let object = object.object_identity();
        log::debug!("revoke all {kind} permissions for {identity} on {object}");

        let mut acl = self.store.create_or_find(&object).await?;
        enforcement::revoke_all(&mut acl, &identity, kind);
        self.store.persist(&acl).await?;
        Ok(())
    }

    /// Installs the default class-scoped grants on `object`'s ACL.
    ///
    /// An explicit bootstrap step, intended to run once when an object
    /// first comes under protection. Safe to repeat: installation
    /// deduplicates against existing entries and never removes any.
    pub async fn install_defaults<O: Protected>(&self, object: &O) -> Result<()> {
        let object = object.object_identity();
        log::debug!("install default grants on {object}");

        let mut acl = self.store.create_or_find(&object).await?;
        enforcement::install_defaults(&mut acl, &self.defaults);
        self.store.persist(&acl).await?;
        Ok(())
    }

    /// Deletes `object`'s ACL record entirely.
    ///
    /// No engine involvement; entries of both kinds are gone with the
    /// record.
    pub async fn delete_acl<O: Protected>(&self, object: &O) -> Result<()> {
        let object = object.object_identity();
        log::debug!("delete ACL for {object}");
        self.store.delete(&object).await?;
        Ok(())
    }

    /// Batch-fetches the ACL records for many objects in one round trip.
    ///
    /// A preload hint to the store; objects without a record are simply
    /// absent from the returned map.
    pub async fn preload_acls<O: Protected>(
        &self,
        objects: &[O],
    ) -> Result<HashMap<ObjectIdentity, AclRecord>> {
        let identities: Vec<ObjectIdentity> = objects
            .iter()
            .map(|object| object.object_identity())
            .collect();
        Ok(self.store.find_many(&identities).await?)
    }
}
