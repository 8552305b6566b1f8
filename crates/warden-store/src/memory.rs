//! In-memory ACL storage.
//!
//! [`MemoryAclStore`] keeps every record in a `HashMap` behind a
//! `tokio::sync::RwLock`. It backs the test suites and works as an
//! embedded store for single-process deployments that don't need
//! durability.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use warden_core::{AclRecord, ObjectIdentity};

use crate::error::{Error, Result};
use crate::traits::AclStore;

/// ACL store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryAclStore {
    records: RwLock<HashMap<ObjectIdentity, AclRecord>>,
}

impl MemoryAclStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Creates an empty record for `object`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyExists`] if a record is present. The
    /// [`AclStore::create_or_find`] implementation catches this and falls
    /// back to fetching; it is control flow at the store boundary, not a
    /// caller-visible failure.
    async fn create(&self, object: &ObjectIdentity) -> Result<AclRecord> {
        let mut records = self.records.write().await;
        if records.contains_key(object) {
            return Err(Error::AlreadyExists(object.clone()));
        }
        let acl = AclRecord::new(object.clone());
        records.insert(object.clone(), acl.clone());
        Ok(acl)
    }

    async fn find(&self, object: &ObjectIdentity) -> Result<AclRecord> {
        self.records
            .read()
            .await
            .get(object)
            .cloned()
            .ok_or_else(|| Error::NotFound(object.clone()))
    }
}

#[async_trait]
impl AclStore for MemoryAclStore {
    async fn create_or_find(&self, object: &ObjectIdentity) -> Result<AclRecord> {
        match self.create(object).await {
            Ok(acl) => Ok(acl),
            Err(Error::AlreadyExists(_)) => {
                log::debug!("ACL for {object} already exists, fetching");
                self.find(object).await
            }
            Err(e) => Err(e),
        }
    }

    async fn delete(&self, object: &ObjectIdentity) -> Result<()> {
        let removed = self.records.write().await.remove(object);
        if removed.is_some() {
            log::debug!("deleted ACL for {object}");
        }
        Ok(())
    }

    async fn persist(&self, acl: &AclRecord) -> Result<()> {
        let mut records = self.records.write().await;
        match records.get_mut(acl.object()) {
            Some(stored) => {
                *stored = acl.clone();
                Ok(())
            }
            None => Err(Error::NotFound(acl.object().clone())),
        }
    }

    async fn find_many(
        &self,
        objects: &[ObjectIdentity],
    ) -> Result<HashMap<ObjectIdentity, AclRecord>> {
        let records = self.records.read().await;
        Ok(objects
            .iter()
            .filter_map(|object| {
                records
                    .get(object)
                    .map(|acl| (object.clone(), acl.clone()))
            })
            .collect())
    }
}
