//! Auth configuration loaded from environment.
//!
//! Unset or unparseable values fall back to defaults; configuration can never
//! make provider selection fail.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const GUEST_ONLY_VAR: &str = "ADMIN_AUTH_GUEST_ONLY";
const LOGIN_PATH_VAR: &str = "ADMIN_LOGIN_PATH";
const DEFAULT_LOGIN_PATH: &str = "/login";

/// Provider selection and redirect settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// Always compose the guest provider, even when the host knows a user.
    pub guest_only: bool,
    /// Route unauthenticated visitors are sent to.
    pub login_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { guest_only: false, login_path: DEFAULT_LOGIN_PATH.to_owned() }
    }
}

impl AuthConfig {
    /// Load from `ADMIN_AUTH_GUEST_ONLY` and `ADMIN_LOGIN_PATH`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, test map, etc.).
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let guest_only = lookup(GUEST_ONLY_VAR)
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(defaults.guest_only);
        let login_path = lookup(LOGIN_PATH_VAR)
            .map(|raw| raw.trim().to_owned())
            .filter(|path| path.starts_with('/'))
            .unwrap_or(defaults.login_path);
        Self { guest_only, login_path }
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
