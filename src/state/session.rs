//! Signed-in auth backend over a host-supplied user snapshot.
//!
//! The snapshot is immutable. Refreshing or revoking the session is the
//! host's job: it recomposes the store with a new user (or none).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::provider::{AuthContext, AuthErrorContext, AuthProvider};
use crate::types::{PermissionSet, User};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionAuth {
    user: User,
}

impl SessionAuth {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

impl AuthProvider for SessionAuth {
    fn name(&self) -> Option<&str> {
        Some(&self.user.name)
    }

    fn email(&self) -> Option<&str> {
        self.user.email.as_deref()
    }

    fn permissions(&self) -> &PermissionSet {
        &self.user.permissions
    }

    fn check_auth(&self, _: &AuthContext<'_>) {}

    fn check_error(&self, ctx: &AuthErrorContext<'_>) {
        if ctx.is_auth_failure() {
            leptos::logging::warn!(
                "auth rejected for user {}: status={:?} {}",
                self.user.id,
                ctx.status,
                ctx.message
            );
        }
    }
}
