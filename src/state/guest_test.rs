use super::*;

fn assert_logged_out(provider: &GuestAuth) {
    assert!(provider.name().is_none());
    assert!(provider.email().is_none());
    assert!(provider.permissions().is_empty());
    assert!(!provider.is_authenticated());
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn guest_has_no_name() {
    assert_eq!(GUEST.name(), None);
}

#[test]
fn guest_has_no_email() {
    assert_eq!(GUEST.email(), None);
}

#[test]
fn guest_has_no_permissions() {
    assert!(GUEST.permissions().is_empty());
    assert!(!GUEST.has_permission("admin"));
}

#[test]
fn guest_snapshot_serializes_as_logged_out() {
    let json = serde_json::to_value(GUEST.snapshot()).unwrap();
    assert_eq!(json, serde_json::json!({ "name": null, "email": null, "permissions": [] }));
}

// =============================================================
// Actions
// =============================================================

#[test]
fn check_auth_leaves_state_unchanged() {
    let guest = GuestAuth;
    for path in ["/", "/users", "/settings/roles"] {
        guest.check_auth(&AuthContext::new(path));
    }
    assert_logged_out(&guest);
    assert_eq!(guest, GUEST);
}

#[test]
fn check_error_leaves_state_unchanged() {
    let guest = GuestAuth;
    guest.check_error(&AuthErrorContext::new(Some(401), "unauthorized"));
    guest.check_error(&AuthErrorContext::new(Some(500), "server error"));
    guest.check_error(&AuthErrorContext::new(None, ""));
    assert_logged_out(&guest);
}

// =============================================================
// Idempotence / concurrency
// =============================================================

#[test]
fn interleaved_calls_always_yield_same_results() {
    let first = GUEST.snapshot();
    for i in 0..50 {
        if i % 3 == 0 {
            GUEST.check_auth(&AuthContext::new("/dashboard"));
        }
        if i % 5 == 0 {
            GUEST.check_error(&AuthErrorContext::new(Some(403), "forbidden"));
        }
        assert_eq!(GUEST.snapshot(), first);
    }
}

#[test]
fn permissions_reference_is_shared() {
    assert!(std::ptr::eq(GUEST.permissions(), GuestAuth.permissions()));
}

#[test]
fn concurrent_callers_see_logged_out_state() {
    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    GUEST.check_auth(&AuthContext::new("/"));
                    assert_logged_out(&GUEST);
                }
            });
        }
    });
}
