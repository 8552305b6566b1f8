//! Default grants installed on newly protected objects.

use serde::{Deserialize, Serialize};
use warden_core::{AceKind, PermissionMask, SecurityIdentity};

use crate::context::PermissionContext;

/// Role name for the all-powerful bootstrap administrator.
pub const SUPERUSER_ROLE: &str = "administrator-superuser";

/// Role name for regular administrators.
pub const ADMINISTRATOR_ROLE: &str = "administrator";

/// Well-known role marking unauthenticated access.
pub const ANONYMOUS_ROLE: &str = "anonymous";

/// Role name shared by every authenticated user.
pub const USER_ROLE: &str = "user";

/// The role names receiving default class-scoped grants.
///
/// The [`Default`] impl carries the standard bootstrap policy:
///
/// | Role | Mask |
/// |------|------|
/// | `administrator-superuser` | `IDDQD` (everything, present and future) |
/// | `administrator` | `MASTER` |
/// | `anonymous` | `VIEW` |
/// | `user` | `VIEW \| CREATE` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultGrants {
    /// Role granted the full mask.
    pub superuser_role: String,
    /// Role granted `MASTER`.
    pub administrator_role: String,
    /// Role granted `VIEW`.
    pub anonymous_role: String,
    /// Role granted `VIEW | CREATE`.
    pub user_role: String,
}

impl Default for DefaultGrants {
    fn default() -> Self {
        Self {
            superuser_role: SUPERUSER_ROLE.to_string(),
            administrator_role: ADMINISTRATOR_ROLE.to_string(),
            anonymous_role: ANONYMOUS_ROLE.to_string(),
            user_role: USER_ROLE.to_string(),
        }
    }
}

impl DefaultGrants {
    /// The four class-scoped grant contexts, in installation order.
    ///
    /// Each is applied independently; because application inserts at the
    /// head, the last context ends up with the highest precedence among
    /// the four on a fresh record.
    pub fn contexts(&self) -> Vec<PermissionContext> {
        vec![
            PermissionContext::grant(
                AceKind::Class,
                SecurityIdentity::role(&self.superuser_role),
                PermissionMask::IDDQD,
            ),
            PermissionContext::grant(
                AceKind::Class,
                SecurityIdentity::role(&self.administrator_role),
                PermissionMask::MASTER,
            ),
            PermissionContext::grant(
                AceKind::Class,
                SecurityIdentity::role(&self.anonymous_role),
                PermissionMask::VIEW,
            ),
            PermissionContext::grant(
                AceKind::Class,
                SecurityIdentity::role(&self.user_role),
                PermissionMask::VIEW | PermissionMask::CREATE,
            ),
        ]
    }
}
