//! # warden-acl
//!
//! Permission-context enforcement for the Warden access control toolkit.
//!
//! This crate implements the decision core of Warden:
//! - [`PermissionContext`] — a requested permission change and its
//!   matching rule against existing entries
//! - [`enforcement`] — apply/revoke/revoke-all over an ACL's ordered
//!   entry collections, with explicit-denial fallback
//! - [`policy`] — the default grants installed on newly protected objects
//! - [`resolve`] — turning accounts, sessions, and role names into
//!   [`SecurityIdentity`](warden_core::SecurityIdentity) values
//! - [`AclManager`] — the load → mutate → persist orchestrator over an
//!   [`AclStore`](warden_store::AclStore)
//!
//! # Example
//!
//! ```
//! use warden_acl::AclManager;
//! use warden_core::{AceKind, ObjectIdentity, PermissionMask, Protected};
//! use warden_store::MemoryAclStore;
//! # use uuid::Uuid;
//!
//! struct Document {
//!     id: Uuid,
//! }
//!
//! impl Protected for Document {
//!     fn object_identity(&self) -> ObjectIdentity {
//!         ObjectIdentity::object(self.id, "document")
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> warden_acl::Result<()> {
//! let manager = AclManager::new(MemoryAclStore::new());
//! let doc = Document { id: Uuid::new_v4() };
//!
//! manager
//!     .add_permission(&doc, "editor", PermissionMask::EDIT, AceKind::Object)
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod context;
pub mod enforcement;
pub mod error;
pub mod manager;
pub mod policy;
pub mod resolve;

mod proptests;

pub use context::PermissionContext;
pub use error::{Error, Result};
pub use manager::AclManager;
pub use policy::DefaultGrants;
pub use resolve::{AuthSession, Principal, UserAccount, resolve};
