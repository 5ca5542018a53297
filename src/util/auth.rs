//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior
//! and report failures through the same provider the guard consulted.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::AuthConfig;
use crate::state::auth::AuthState;
use crate::state::provider::{AuthContext, AuthErrorContext, AuthProvider};

/// Put `state` into context for child components and return the signal.
pub fn provide_auth(state: AuthState) -> RwSignal<AuthState> {
    let auth = RwSignal::new(state);
    provide_context(auth);
    auth
}

/// The auth signal installed by [`provide_auth`].
pub fn use_auth() -> RwSignal<AuthState> {
    expect_context::<RwSignal<AuthState>>()
}

/// Whether a guarded route should bounce to the login page.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.store.is_authenticated()
}

/// Where a guard on `path` should send the visitor, if anywhere.
///
/// `None` on the login page itself so the guard cannot loop.
pub fn redirect_target<'a>(state: &AuthState, path: &str, config: &'a AuthConfig) -> Option<&'a str> {
    (should_redirect_unauth(state) && path != config.login_path).then_some(config.login_path.as_str())
}

/// Check auth for `path` whenever the state settles, and redirect to the
/// configured login path when nobody is signed in.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, config: &AuthConfig, path: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let config = config.clone();
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        state.store.check_auth(&AuthContext::new(&path));
        if let Some(target) = redirect_target(&state, &path, &config) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Forward a failed request to the composed provider.
pub fn report_auth_error(auth: RwSignal<AuthState>, status: Option<u16>, message: &str) {
    let ctx = AuthErrorContext::new(status, message);
    auth.with_untracked(|state| state.store.check_error(&ctx));
}
