//! Security identities.
//!
//! A [`SecurityIdentity`] is the resolved principal an access control entry
//! refers to: either a concrete user (keyed by a stable account key) or a
//! role. Two identities are equal iff they are the same variant with the
//! same key or name. Identities are immutable once constructed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved principal participating in an access control entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityIdentity {
    /// A concrete user, keyed by a stable account key.
    User {
        /// The stable account key (e.g. an OAuth subject).
        key: String,
    },

    /// A role shared by any number of users.
    Role {
        /// The role name.
        name: String,
    },
}

impl SecurityIdentity {
    /// Creates a user identity from a stable account key.
    pub fn user<S: Into<String>>(key: S) -> Self {
        Self::User { key: key.into() }
    }

    /// Creates a role identity from a role name.
    pub fn role<S: Into<String>>(name: S) -> Self {
        Self::Role { name: name.into() }
    }

    /// Identity refers to a concrete user.
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User { .. })
    }

    /// Identity refers to a role.
    pub fn is_role(&self) -> bool {
        matches!(self, Self::Role { .. })
    }
}

impl fmt::Display for SecurityIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User { key } => write!(f, "user:{key}"),
            Self::Role { name } => write!(f, "role:{name}"),
        }
    }
}
