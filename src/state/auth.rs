//! Auth-session state for the current admin user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The host picks a backend once, at
//! composition time, through [`AuthStore::select`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::guest::{GUEST, GuestAuth};
use super::provider::{AuthContext, AuthErrorContext, AuthProvider};
use super::session::SessionAuth;
use crate::config::AuthConfig;
use crate::types::{PermissionSet, User};

/// The backend the host composed for this page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthStore {
    Guest(GuestAuth),
    Session(SessionAuth),
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::guest()
    }
}

impl AuthStore {
    pub fn guest() -> Self {
        Self::Guest(GUEST)
    }

    /// Compose the backend for `user`: guest when nobody is signed in or when
    /// `config.guest_only` is set.
    pub fn select(user: Option<User>, config: &AuthConfig) -> Self {
        match user {
            Some(user) if config.guest_only => {
                leptos::logging::log!("auth: guest-only mode, ignoring user {}", user.id);
                Self::guest()
            }
            Some(user) => Self::Session(SessionAuth::new(user)),
            None => Self::guest(),
        }
    }

    fn provider(&self) -> &dyn AuthProvider {
        match self {
            Self::Guest(guest) => guest,
            Self::Session(session) => session,
        }
    }
}

impl AuthProvider for AuthStore {
    fn name(&self) -> Option<&str> {
        self.provider().name()
    }

    fn email(&self) -> Option<&str> {
        self.provider().email()
    }

    fn permissions(&self) -> &PermissionSet {
        self.provider().permissions()
    }

    fn check_auth(&self, ctx: &AuthContext<'_>) {
        self.provider().check_auth(ctx);
    }

    fn check_error(&self, ctx: &AuthErrorContext<'_>) {
        self.provider().check_error(ctx);
    }
}

/// Authentication state tracking the composed backend and loading status.
///
/// Shared through context as an `RwSignal<AuthState>`; see
/// [`crate::util::auth::provide_auth`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub store: AuthStore,
    pub loading: bool,
}

impl AuthState {
    /// State while the host is still resolving the current user.
    pub fn loading() -> Self {
        Self { store: AuthStore::guest(), loading: true }
    }

    /// Settle to the backend for `user`.
    pub fn resolved(user: Option<User>, config: &AuthConfig) -> Self {
        Self { store: AuthStore::select(user, config), loading: false }
    }
}
