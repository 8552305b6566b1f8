//! Object identities and the [`Protected`] trait.
//!
//! An [`ObjectIdentity`] is the stable `(id, class)` key an ACL record is
//! filed under. A `None` id marks a class-scoped ACL that covers every
//! instance of the class.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable key identifying a protected domain object (or a whole class).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectIdentity {
    /// The object id, or `None` for a class-scoped ACL.
    pub id: Option<Uuid>,
    /// The object class name.
    pub class: String,
}

impl ObjectIdentity {
    /// Creates the identity of a single object instance.
    pub fn object<S: Into<String>>(id: Uuid, class: S) -> Self {
        Self {
            id: Some(id),
            class: class.into(),
        }
    }

    /// Creates a class-scoped identity covering every instance of `class`.
    pub fn class_scoped<S: Into<String>>(class: S) -> Self {
        Self {
            id: None,
            class: class.into(),
        }
    }

    /// Identity covers a whole class rather than one instance.
    pub fn is_class_scoped(&self) -> bool {
        self.id.is_none()
    }
}

impl fmt::Display for ObjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{}:{id}", self.class),
            None => write!(f, "{}:*", self.class),
        }
    }
}

/// Implemented by domain objects that can be protected by an ACL.
///
/// The returned identity must be stable for the lifetime of the object:
/// every call for the same logical object must yield the same `(id, class)`
/// pair, since it is the key the object's ACL record is filed under.
///
/// # Example
///
/// ```
/// use uuid::Uuid;
/// use warden_core::{ObjectIdentity, Protected};
///
/// struct Document {
///     id: Uuid,
/// }
///
/// impl Protected for Document {
///     fn object_identity(&self) -> ObjectIdentity {
///         ObjectIdentity::object(self.id, "document")
///     }
/// }
/// ```
pub trait Protected {
    /// Derives the stable ACL key for this object.
    fn object_identity(&self) -> ObjectIdentity;
}
