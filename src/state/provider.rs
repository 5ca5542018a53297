//! The authorization state contract every backend implements.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and identity-aware components only see this trait, so the
//! host can swap the guest backend for a real one without touching them.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use crate::types::{AuthSnapshot, PermissionSet};

/// Input to [`AuthProvider::check_auth`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthContext<'a> {
    /// Route being guarded.
    pub path: &'a str,
}

impl<'a> AuthContext<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }
}

/// Input to [`AuthProvider::check_error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthErrorContext<'a> {
    /// HTTP status of the failed request, if the error came from one.
    pub status: Option<u16>,
    pub message: &'a str,
}

impl<'a> AuthErrorContext<'a> {
    pub fn new(status: Option<u16>, message: &'a str) -> Self {
        Self { status, message }
    }

    /// Whether the error means the current credentials were rejected.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status, Some(401 | 403))
    }
}

/// Read accessors and action handlers for the current user's auth state.
///
/// Every method is total. A missing identity is reported as data (`None`,
/// empty permissions), never as an error.
pub trait AuthProvider: Send + Sync {
    /// Display name of the current user.
    fn name(&self) -> Option<&str>;

    /// Email of the current user.
    fn email(&self) -> Option<&str>;

    /// Permissions granted to the current user.
    fn permissions(&self) -> &PermissionSet;

    /// Validate or refresh auth state before `ctx.path` is rendered.
    fn check_auth(&self, ctx: &AuthContext<'_>);

    /// React to an auth-related failure reported elsewhere in the app.
    fn check_error(&self, ctx: &AuthErrorContext<'_>);

    fn is_authenticated(&self) -> bool {
        self.name().is_some()
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions().contains(permission)
    }

    /// Owned copy of the accessors, suitable for serialization.
    fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            name: self.name().map(str::to_owned),
            email: self.email().map(str::to_owned),
            permissions: self.permissions().clone(),
        }
    }
}
