//! # warden-store
//!
//! Storage boundary for the Warden access control toolkit.
//!
//! This crate provides:
//! - The [`AclStore`] abstraction every ACL backend must satisfy
//! - An in-memory backend ([`MemoryAclStore`]) for tests and embedding
//!
//! Backends own all persistence concerns: the create-or-find atomicity of
//! [`AclStore::create_or_find`] and the serialization of concurrent
//! persists for the same object live here, never in the enforcement
//! engine.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Error, Result};
pub use memory::MemoryAclStore;
pub use traits::AclStore;
