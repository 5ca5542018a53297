//! Identity DTOs shared between the host and auth providers.
//!
//! DESIGN
//! ======
//! `User` mirrors the payload of the host's current-user endpoint. Providers
//! never fetch it themselves; the host hands a decoded value over at
//! composition time.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Capability identifiers granted to the current identity.
///
/// Ordered so snapshots and logs are deterministic.
pub type PermissionSet = BTreeSet<String>;

/// An authenticated admin user as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email, if the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// Granted permission identifiers.
    #[serde(default)]
    pub permissions: PermissionSet,
}

/// Serializable view of whatever a provider currently reports.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSnapshot {
    pub name: Option<String>,
    pub email: Option<String>,
    pub permissions: PermissionSet,
}
