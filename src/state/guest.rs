//! Guest (logged-out) auth backend.
//!
//! Reports no identity, no permissions, and ignores every action. The host
//! composes it whenever nobody is signed in.

#[cfg(test)]
#[path = "guest_test.rs"]
mod guest_test;

use super::provider::{AuthContext, AuthErrorContext, AuthProvider};
use crate::types::PermissionSet;

static NO_PERMISSIONS: PermissionSet = PermissionSet::new();

/// The unauthenticated visitor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuestAuth;

/// Shared guest value.
pub const GUEST: GuestAuth = GuestAuth;

impl AuthProvider for GuestAuth {
    fn name(&self) -> Option<&str> {
        None
    }

    fn email(&self) -> Option<&str> {
        None
    }

    fn permissions(&self) -> &PermissionSet {
        &NO_PERMISSIONS
    }

    fn check_auth(&self, _: &AuthContext<'_>) {}

    fn check_error(&self, _: &AuthErrorContext<'_>) {}
}
