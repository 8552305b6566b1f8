//! Error types for warden-acl

use thiserror::Error;

/// Result type alias for warden-acl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in warden-acl
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from warden-core
    #[error("core error: {0}")]
    Core(#[from] warden_core::Error),

    /// Error from the storage boundary
    #[error("store error: {0}")]
    Store(#[from] warden_store::Error),

    /// The principal input could not be classified into a user or role.
    ///
    /// A caller error, not retried.
    #[error("invalid identity kind: {0}")]
    InvalidIdentityKind(String),

    /// Classification succeeded but no concrete identity could be built.
    ///
    /// Defensive: unreachable for well-formed inputs; treated as a bug
    /// surface, not retried.
    #[error("identity resolution failed: {0}")]
    IdentityResolutionFailed(String),
}
