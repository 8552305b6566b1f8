//! Identity resolution.
//!
//! Callers hand the manager whatever principal shape they have — an
//! already-resolved identity, a user account, an authenticated session, or
//! a role name — as a [`Principal`], and [`resolve`] converges them all on
//! the [`SecurityIdentity`] tagged union. Each variant is validated at
//! this boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use warden_core::SecurityIdentity;

use crate::error::{Error, Result};

/// A user account with a stable key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// The stable account key (e.g. an OAuth subject).
    pub key: String,
    /// Optional display name, ignored by resolution.
    pub display_name: Option<String>,
}

impl UserAccount {
    /// Creates an account from its stable key.
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self {
            key: key.into(),
            display_name: None,
        }
    }

    /// Attaches a display name.
    pub fn with_display_name<S: Into<String>>(mut self, name: S) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// A previously authenticated session bound to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// The account this session was authenticated for.
    pub account: UserAccount,
    /// When authentication happened.
    pub authenticated_at: DateTime<Utc>,
}

impl AuthSession {
    /// Creates a session authenticated now.
    pub fn new(account: UserAccount) -> Self {
        Self {
            account,
            authenticated_at: Utc::now(),
        }
    }
}

/// Something that can be resolved into a [`SecurityIdentity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Principal {
    /// An already-resolved identity, returned unchanged.
    Identity(SecurityIdentity),
    /// A user account, resolved to a user identity by its stable key.
    Account(UserAccount),
    /// An authenticated session, resolved through its underlying account.
    Session(AuthSession),
    /// A role name, resolved to a role identity.
    Role(String),
}

impl From<SecurityIdentity> for Principal {
    fn from(identity: SecurityIdentity) -> Self {
        Self::Identity(identity)
    }
}

impl From<UserAccount> for Principal {
    fn from(account: UserAccount) -> Self {
        Self::Account(account)
    }
}

impl From<AuthSession> for Principal {
    fn from(session: AuthSession) -> Self {
        Self::Session(session)
    }
}

impl From<String> for Principal {
    fn from(role: String) -> Self {
        Self::Role(role)
    }
}

impl From<&str> for Principal {
    fn from(role: &str) -> Self {
        Self::Role(role.to_string())
    }
}

/// Resolves a principal into a concrete [`SecurityIdentity`].
///
/// # Errors
///
/// - [`Error::InvalidIdentityKind`] when boundary validation rejects the
///   input (empty role name, account without a key).
/// - [`Error::IdentityResolutionFailed`] when classification succeeded but
///   no concrete identity could be built — a session whose underlying
///   account carries no key. Defensive; unreachable for well-formed
///   sessions.
pub fn resolve(principal: Principal) -> Result<SecurityIdentity> {
    match principal {
        Principal::Identity(identity) => Ok(identity),
        Principal::Account(account) => {
            if account.key.is_empty() {
                return Err(Error::InvalidIdentityKind(
                    "account has no stable key".to_string(),
                ));
            }
            Ok(SecurityIdentity::user(account.key))
        }
        Principal::Session(session) => {
            if session.account.key.is_empty() {
                return Err(Error::IdentityResolutionFailed(
                    "session's account has no stable key".to_string(),
                ));
            }
            Ok(SecurityIdentity::user(session.account.key))
        }
        Principal::Role(name) => {
            if name.is_empty() {
                return Err(Error::InvalidIdentityKind("empty role name".to_string()));
            }
            Ok(SecurityIdentity::role(name))
        }
    }
}
