use super::*;
use crate::state::auth::AuthStore;
use crate::types::User;

fn signed_in() -> AuthStore {
    AuthStore::select(
        Some(User {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: None,
            permissions: Default::default(),
        }),
        &AuthConfig::default(),
    )
}

#[test]
fn should_redirect_unauth_when_not_loading_and_guest() {
    let state = AuthState { store: AuthStore::guest(), loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::loading()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState { store: signed_in(), loading: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn guest_only_state_redirects_even_with_user() {
    let config = AuthConfig { guest_only: true, ..AuthConfig::default() };
    let AuthStore::Session(session) = signed_in() else {
        panic!("expected a session store");
    };
    let state = AuthState::resolved(Some(session.user().clone()), &config);
    assert!(should_redirect_unauth(&state));
}

// =============================================================
// redirect_target
// =============================================================

#[test]
fn guest_on_guarded_path_goes_to_configured_login() {
    let config = AuthConfig { login_path: "/admin/login".to_owned(), ..AuthConfig::default() };
    let state = AuthState::resolved(None, &config);
    assert_eq!(redirect_target(&state, "/users", &config), Some("/admin/login"));
}

#[test]
fn guest_on_login_path_is_not_redirected() {
    let config = AuthConfig::default();
    let state = AuthState::resolved(None, &config);
    assert_eq!(redirect_target(&state, "/login", &config), None);
}

#[test]
fn no_redirect_while_loading_or_signed_in() {
    let config = AuthConfig::default();
    assert_eq!(redirect_target(&AuthState::loading(), "/users", &config), None);
    let state = AuthState { store: signed_in(), loading: false };
    assert_eq!(redirect_target(&state, "/users", &config), None);
}

// =============================================================
// Context
// =============================================================

#[test]
fn use_auth_returns_provided_signal() {
    let owner = Owner::new();
    owner.set();

    let provided = provide_auth(AuthState::resolved(None, &AuthConfig::default()));
    let found = use_auth();
    assert_eq!(found.get_untracked(), provided.get_untracked());

    found.set(AuthState { store: signed_in(), loading: false });
    assert!(provided.get_untracked().store.is_authenticated());
}

#[test]
fn report_auth_error_leaves_guest_state_unchanged() {
    let owner = Owner::new();
    owner.set();

    let auth = provide_auth(AuthState::resolved(None, &AuthConfig::default()));
    let before = auth.get_untracked();
    report_auth_error(auth, Some(401), "expired");
    assert_eq!(auth.get_untracked(), before);
    assert!(should_redirect_unauth(&auth.get_untracked()));
}

#[test]
fn report_auth_error_leaves_session_state_unchanged() {
    let owner = Owner::new();
    owner.set();

    let auth = provide_auth(AuthState { store: signed_in(), loading: false });
    let before = auth.get_untracked();
    report_auth_error(auth, Some(403), "forbidden");
    report_auth_error(auth, None, "offline");
    assert_eq!(auth.get_untracked(), before);
    assert!(!should_redirect_unauth(&auth.get_untracked()));
}
