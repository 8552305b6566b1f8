//! Error types for warden-store

use thiserror::Error;
use warden_core::ObjectIdentity;

/// Result type alias for warden-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the storage boundary
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An ACL record already exists for the object.
    ///
    /// Raised by a backend's create path. [`AclStore::create_or_find`]
    /// implementations must catch it and fall back to fetching, so it never
    /// reaches engine callers.
    ///
    /// [`AclStore::create_or_find`]: crate::AclStore::create_or_find
    #[error("ACL already exists for {0}")]
    AlreadyExists(ObjectIdentity),

    /// No ACL record exists for the object.
    ///
    /// From [`persist`](crate::AclStore::persist) this signals a conflict:
    /// the record was deleted after it was loaded.
    #[error("no ACL found for {0}")]
    NotFound(ObjectIdentity),

    /// The backend failed (I/O, connection, corruption).
    #[error("storage backend error: {0}")]
    Backend(String),
}
