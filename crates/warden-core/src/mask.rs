//! Permission bitmasks.
//!
//! A [`PermissionMask`] encodes a set of permission levels as bits in a
//! `u32`. Masks compose with bitwise OR and are compared for *exact*
//! equality when matched against an access control entry — no
//! subset/superset matching anywhere in the engine.
//!
//! | Bit | Grants |
//! |-----|--------|
//! | [`VIEW`](PermissionMask::VIEW) | See the object |
//! | [`CREATE`](PermissionMask::CREATE) | Create child objects |
//! | [`EDIT`](PermissionMask::EDIT) | Modify the object |
//! | [`DELETE`](PermissionMask::DELETE) | Remove the object |
//! | [`UNDELETE`](PermissionMask::UNDELETE) | Restore a removed object |
//! | [`OPERATOR`](PermissionMask::OPERATOR) | All of the above |
//! | [`MASTER`](PermissionMask::MASTER) | Grant/revoke the above to others |
//! | [`OWNER`](PermissionMask::OWNER) | Change ownership and masters |
//!
//! [`IDDQD`](PermissionMask::IDDQD) sets every bit of the word, so it
//! grants all permissions including ones defined in the future.
//!
//! # Example
//!
//! ```
//! use warden_core::PermissionMask;
//!
//! let mask = PermissionMask::VIEW | PermissionMask::CREATE;
//! assert!(mask.contains(PermissionMask::VIEW));
//! assert!(!mask.contains(PermissionMask::EDIT));
//! assert!(PermissionMask::IDDQD.contains(mask));
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

bitflags! {
    /// Bitmask of permission levels, ascending in significance.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PermissionMask: u32 {
        /// See the object.
        const VIEW     = 1 << 0;
        /// Create child objects.
        const CREATE   = 1 << 1;
        /// Modify the object.
        const EDIT     = 1 << 2;
        /// Remove the object.
        const DELETE   = 1 << 3;
        /// Restore a removed object.
        const UNDELETE = 1 << 4;
        /// Operator level.
        const OPERATOR = 1 << 5;
        /// Master level: manage other identities' grants.
        const MASTER   = 1 << 6;
        /// Owner level: change ownership and masters.
        const OWNER    = 1 << 7;
        /// Every bit of the word, including bits not yet named.
        const IDDQD    = u32::MAX;
    }
}

impl PermissionMask {
    /// Returns a human-readable list of the named bits set in this mask.
    ///
    /// The full mask reports as `["IDDQD"]` rather than listing each bit.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        if self == Self::IDDQD {
            return vec!["IDDQD"];
        }
        let mut names = Vec::new();
        if self.contains(Self::VIEW) {
            names.push("VIEW");
        }
        if self.contains(Self::CREATE) {
            names.push("CREATE");
        }
        if self.contains(Self::EDIT) {
            names.push("EDIT");
        }
        if self.contains(Self::DELETE) {
            names.push("DELETE");
        }
        if self.contains(Self::UNDELETE) {
            names.push("UNDELETE");
        }
        if self.contains(Self::OPERATOR) {
            names.push("OPERATOR");
        }
        if self.contains(Self::MASTER) {
            names.push("MASTER");
        }
        if self.contains(Self::OWNER) {
            names.push("OWNER");
        }
        names
    }

    /// Parses a single permission name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPermission`] for names that match no bit.
    ///
    /// # Example
    ///
    /// ```
    /// use warden_core::PermissionMask;
    ///
    /// assert_eq!(
    ///     PermissionMask::parse("view").unwrap(),
    ///     PermissionMask::VIEW
    /// );
    /// assert!(PermissionMask::parse("teleport").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_uppercase().as_str() {
            "VIEW" => Ok(Self::VIEW),
            "CREATE" => Ok(Self::CREATE),
            "EDIT" => Ok(Self::EDIT),
            "DELETE" => Ok(Self::DELETE),
            "UNDELETE" => Ok(Self::UNDELETE),
            "OPERATOR" => Ok(Self::OPERATOR),
            "MASTER" => Ok(Self::MASTER),
            "OWNER" => Ok(Self::OWNER),
            "IDDQD" => Ok(Self::IDDQD),
            _ => Err(Error::UnknownPermission(name.to_string())),
        }
    }

    /// Parses a list of permission names into a combined mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPermission`] on the first unknown name.
    pub fn parse_list<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut mask = Self::empty();
        for name in names {
            mask |= Self::parse(name.as_ref())?;
        }
        Ok(mask)
    }
}

impl std::fmt::Display for PermissionMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}
