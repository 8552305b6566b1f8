//! End-to-end tests driving [`AclManager`] over the in-memory store.

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;
use warden_acl::{AclManager, DefaultGrants, Error, UserAccount};
use warden_core::{AceKind, AclRecord, ObjectIdentity, PermissionMask, Protected, SecurityIdentity};
use warden_store::{AclStore, MemoryAclStore};

struct Post {
    id: Uuid,
}

impl Post {
    fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }
}

impl Protected for Post {
    fn object_identity(&self) -> ObjectIdentity {
        ObjectIdentity::object(self.id, "post")
    }
}

async fn stored_acl(manager: &AclManager<MemoryAclStore>, post: &Post) -> AclRecord {
    manager
        .store()
        .create_or_find(&post.object_identity())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_grant_then_revoke_scenario() {
    let manager = AclManager::new(MemoryAclStore::new());
    let post = Post::new();
    let mask = PermissionMask::VIEW | PermissionMask::EDIT;

    manager
        .add_permission(&post, "editor", mask, AceKind::Object)
        .await
        .unwrap();

    let acl = stored_acl(&manager, &post).await;
    let entries = acl.entries(AceKind::Object);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].identity, SecurityIdentity::role("editor"));
    assert_eq!(entries[0].mask, mask);
    assert!(entries[0].granting);

    // Revoking the grant deletes it.
    manager
        .revoke_permission(&post, "editor", mask, AceKind::Object)
        .await
        .unwrap();
    let acl = stored_acl(&manager, &post).await;
    assert!(acl.entries(AceKind::Object).is_empty());

    // Revoking again finds no match and materializes an explicit denial.
    manager
        .revoke_permission(&post, "editor", mask, AceKind::Object)
        .await
        .unwrap();
    let acl = stored_acl(&manager, &post).await;
    let entries = acl.entries(AceKind::Object);
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].granting);
    assert_eq!(entries[0].mask, mask);
}

#[tokio::test]
async fn test_add_permission_is_idempotent_across_calls() {
    let manager = AclManager::new(MemoryAclStore::new());
    let post = Post::new();

    for _ in 0..3 {
        manager
            .add_permission(&post, "editor", PermissionMask::VIEW, AceKind::Object)
            .await
            .unwrap();
    }

    let acl = stored_acl(&manager, &post).await;
    assert_eq!(acl.entries(AceKind::Object).len(), 1);
}

#[tokio::test]
async fn test_account_and_session_principals() {
    let manager = AclManager::new(MemoryAclStore::new());
    let post = Post::new();

    let account = UserAccount::new("sub_123").with_display_name("Alice");
    manager
        .add_permission(&post, account, PermissionMask::OWNER, AceKind::Object)
        .await
        .unwrap();

    let acl = stored_acl(&manager, &post).await;
    assert_eq!(
        acl.entries(AceKind::Object)[0].identity,
        SecurityIdentity::user("sub_123")
    );
}

#[tokio::test]
async fn test_invalid_principal_leaves_store_untouched() {
    let manager = AclManager::new(MemoryAclStore::new());
    let post = Post::new();

    let err = manager
        .add_permission(&post, "", PermissionMask::VIEW, AceKind::Object)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidIdentityKind(_)));

    // Resolution failed before any store call: no ACL was created.
    assert!(manager.store().is_empty().await);
}

#[tokio::test]
async fn test_install_defaults_bootstrap() {
    let manager = AclManager::new(MemoryAclStore::new());
    let post = Post::new();

    manager.install_defaults(&post).await.unwrap();
    manager.install_defaults(&post).await.unwrap();

    let acl = stored_acl(&manager, &post).await;
    let entries = acl.entries(AceKind::Class);
    assert_eq!(entries.len(), 4);

    // "user" was applied last, so it has the highest precedence.
    assert_eq!(entries[0].identity, SecurityIdentity::role("user"));
    assert_eq!(entries[3].mask, PermissionMask::IDDQD);
}

#[tokio::test]
async fn test_custom_default_grants() {
    let defaults = DefaultGrants {
        anonymous_role: "guest".to_string(),
        ..Default::default()
    };
    let manager = AclManager::with_defaults(MemoryAclStore::new(), defaults);
    let post = Post::new();

    manager.install_defaults(&post).await.unwrap();

    let acl = stored_acl(&manager, &post).await;
    assert!(
        acl.entries(AceKind::Class)
            .iter()
            .any(|entry| entry.identity == SecurityIdentity::role("guest"))
    );
}

#[tokio::test]
async fn test_revoke_all_permissions_scope() {
    let manager = AclManager::new(MemoryAclStore::new());
    let post = Post::new();

    manager
        .add_permission(&post, "editor", PermissionMask::VIEW, AceKind::Object)
        .await
        .unwrap();
    manager
        .add_permission(&post, "editor", PermissionMask::EDIT, AceKind::Object)
        .await
        .unwrap();
    manager
        .add_permission(&post, "viewer", PermissionMask::VIEW, AceKind::Object)
        .await
        .unwrap();

    manager
        .revoke_all_permissions(&post, "editor", AceKind::Object)
        .await
        .unwrap();

    let acl = stored_acl(&manager, &post).await;
    let entries = acl.entries(AceKind::Object);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].identity, SecurityIdentity::role("viewer"));
}

#[tokio::test]
async fn test_delete_acl() {
    let manager = AclManager::new(MemoryAclStore::new());
    let post = Post::new();

    manager
        .add_permission(&post, "editor", PermissionMask::VIEW, AceKind::Object)
        .await
        .unwrap();
    manager.delete_acl(&post).await.unwrap();

    assert!(manager.store().is_empty().await);
}

#[tokio::test]
async fn test_preload_acls() {
    let manager = AclManager::new(MemoryAclStore::new());
    let granted = Post::new();
    let ungranted = Post::new();

    manager
        .add_permission(&granted, "editor", PermissionMask::VIEW, AceKind::Object)
        .await
        .unwrap();

    let preloaded = manager.preload_acls(&[granted, ungranted]).await.unwrap();
    assert_eq!(preloaded.len(), 1);
}

/// Store whose persist always fails, for error-propagation tests.
struct BrokenStore {
    inner: MemoryAclStore,
}

#[async_trait]
impl AclStore for BrokenStore {
    async fn create_or_find(
        &self,
        object: &ObjectIdentity,
    ) -> warden_store::Result<AclRecord> {
        self.inner.create_or_find(object).await
    }

    async fn delete(&self, object: &ObjectIdentity) -> warden_store::Result<()> {
        self.inner.delete(object).await
    }

    async fn persist(&self, _acl: &AclRecord) -> warden_store::Result<()> {
        Err(warden_store::Error::Backend("disk full".to_string()))
    }

    async fn find_many(
        &self,
        objects: &[ObjectIdentity],
    ) -> warden_store::Result<HashMap<ObjectIdentity, AclRecord>> {
        self.inner.find_many(objects).await
    }
}

#[tokio::test]
async fn test_persist_failure_propagates_and_drops_mutation() {
    let manager = AclManager::new(BrokenStore {
        inner: MemoryAclStore::new(),
    });
    let post = Post::new();

    let err = manager
        .add_permission(&post, "editor", PermissionMask::VIEW, AceKind::Object)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Store(warden_store::Error::Backend(_))));

    // The in-memory mutation was discarded with the failed operation: the
    // stored record is still empty.
    let acl = manager
        .store()
        .create_or_find(&post.object_identity())
        .await
        .unwrap();
    assert!(acl.is_empty());
}
