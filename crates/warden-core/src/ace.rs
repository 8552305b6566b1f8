//! Access control entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::identity::SecurityIdentity;
use crate::mask::PermissionMask;

/// Which of an ACL record's two ordered collections an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AceKind {
    /// Entries scoped to one object instance.
    Object,
    /// Entries scoped to the whole object class.
    Class,
}

impl fmt::Display for AceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => write!(f, "object"),
            Self::Class => write!(f, "class"),
        }
    }
}

/// One access control entry: an identity granted or denied a mask.
///
/// An entry belongs to exactly one [`AclRecord`](crate::AclRecord) and one
/// kind partition. Its position within the partition's ordered collection
/// is meaningful — the consuming evaluator takes the first match — but is
/// carried by the collection itself, not the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControlEntry {
    /// The identity this entry applies to.
    pub identity: SecurityIdentity,
    /// The exact permission mask granted or denied.
    pub mask: PermissionMask,
    /// `true` grants the mask, `false` explicitly denies it.
    pub granting: bool,
}

impl AccessControlEntry {
    /// Creates a new entry.
    pub fn new(identity: SecurityIdentity, mask: PermissionMask, granting: bool) -> Self {
        Self {
            identity,
            mask,
            granting,
        }
    }
}

impl fmt::Display for AccessControlEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.granting { "grant" } else { "deny" };
        write!(f, "{verb} {} to {}", self.mask, self.identity)
    }
}
