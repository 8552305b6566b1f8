//! The storage abstraction every ACL backend must satisfy.

use std::collections::HashMap;

use async_trait::async_trait;
use warden_core::{AclRecord, ObjectIdentity};

use crate::error::Result;

/// Abstract ACL storage backend.
///
/// Implementations hold the durable copy of every [`AclRecord`] and are
/// responsible for serializing concurrent persists of the same object's
/// record. Callers follow a load → mutate → persist cycle: the record
/// returned by [`create_or_find`](Self::create_or_find) is an exclusively
/// held in-memory copy, mutated in place and written back with
/// [`persist`](Self::persist).
///
/// # Async
///
/// All methods are async to support I/O-bound backends (databases, remote
/// services) without blocking.
#[async_trait]
pub trait AclStore: Send + Sync {
    /// Returns the record for `object`, creating an empty one if none
    /// exists.
    ///
    /// Idempotent: when a concurrent creation wins the race, the
    /// implementation falls back to fetching the existing record instead
    /// of surfacing [`Error::AlreadyExists`](crate::Error::AlreadyExists).
    async fn create_or_find(&self, object: &ObjectIdentity) -> Result<AclRecord>;

    /// Deletes the record for `object`, along with all of its entries.
    ///
    /// Deleting an object with no record is a no-op.
    async fn delete(&self, object: &ObjectIdentity) -> Result<()>;

    /// Writes back a mutated record.
    ///
    /// # Errors
    ///
    /// Fails loudly on conflict or backend failure — never silently drops
    /// changes. [`Error::NotFound`](crate::Error::NotFound) signals that
    /// the record was deleted after it was loaded.
    async fn persist(&self, acl: &AclRecord) -> Result<()>;

    /// Batch-fetches the records for many objects in one round trip.
    ///
    /// Advisory: objects without a record are absent from the returned
    /// map, not an error.
    async fn find_many(
        &self,
        objects: &[ObjectIdentity],
    ) -> Result<HashMap<ObjectIdentity, AclRecord>>;
}
