//! Error types for warden-core

use thiserror::Error;

/// Result type alias for warden-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in warden-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A permission name did not match any known mask bit.
    #[error("unknown permission: '{0}'")]
    UnknownPermission(String),
}
