//! The per-object ACL record.
//!
//! An [`AclRecord`] holds the two ordered ACE collections (object-scoped
//! and class-scoped) attached to one [`ObjectIdentity`]. Records are
//! created or fetched by a store, mutated in place by the enforcement
//! engine, and handed back to the store for persistence — the engine never
//! creates or destroys a record itself.

use serde::{Deserialize, Serialize};

use crate::ace::{AccessControlEntry, AceKind};
use crate::object::ObjectIdentity;

/// The full set of access control entries attached to one protected object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclRecord {
    object: ObjectIdentity,
    object_aces: Vec<AccessControlEntry>,
    class_aces: Vec<AccessControlEntry>,
}

impl AclRecord {
    /// Creates an empty record for the given object identity.
    pub fn new(object: ObjectIdentity) -> Self {
        Self {
            object,
            object_aces: Vec::new(),
            class_aces: Vec::new(),
        }
    }

    /// The identity this record is filed under.
    pub fn object(&self) -> &ObjectIdentity {
        &self.object
    }

    /// The ordered entries of one kind partition.
    ///
    /// Order is precedence: the consuming evaluator takes the first match.
    pub fn entries(&self, kind: AceKind) -> &[AccessControlEntry] {
        match kind {
            AceKind::Object => &self.object_aces,
            AceKind::Class => &self.class_aces,
        }
    }

    /// Mutable access to one kind partition, for the enforcement engine.
    pub fn entries_mut(&mut self, kind: AceKind) -> &mut Vec<AccessControlEntry> {
        match kind {
            AceKind::Object => &mut self.object_aces,
            AceKind::Class => &mut self.class_aces,
        }
    }

    /// Record holds no entries of either kind.
    pub fn is_empty(&self) -> bool {
        self.object_aces.is_empty() && self.class_aces.is_empty()
    }
}
