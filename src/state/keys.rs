//! Namespaced key access to the auth state.
//!
//! DESIGN
//! ======
//! Sibling state containers in the admin panel are addressed as
//! `<namespace>/<key>`. Auth keys resolve to the enums below, so a typo is a
//! parse error rather than a silent miss.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::provider::{AuthContext, AuthErrorContext, AuthProvider};
use crate::types::PermissionSet;

/// Namespace the auth container is registered under.
pub const NAMESPACE: &str = "auth";

/// Error returned when parsing a getter or action key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("unknown auth getter: {0}")]
    UnknownGetter(String),
    #[error("unknown auth action: {0}")]
    UnknownAction(String),
    /// The key is qualified with a namespace other than [`NAMESPACE`].
    #[error("key {0:?} does not belong to the `auth` namespace")]
    ForeignNamespace(String),
}

/// Strip an optional `auth/` prefix, rejecting other namespaces.
fn local_key(raw: &str) -> Result<&str, KeyError> {
    match raw.split_once('/') {
        Some((NAMESPACE, key)) => Ok(key),
        Some(_) => Err(KeyError::ForeignNamespace(raw.to_owned())),
        None => Ok(raw),
    }
}

/// Read accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthGetter {
    Name,
    Email,
    Permissions,
}

impl AuthGetter {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Permissions];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "getName",
            Self::Email => "getEmail",
            Self::Permissions => "getPermissions",
        }
    }

    /// Key qualified with [`NAMESPACE`], e.g. `auth/getName`.
    pub fn qualified(self) -> String {
        format!("{NAMESPACE}/{}", self.key())
    }
}

impl fmt::Display for AuthGetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AuthGetter {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = local_key(s)?;
        Self::ALL
            .into_iter()
            .find(|getter| getter.key() == key)
            .ok_or_else(|| KeyError::UnknownGetter(s.to_owned()))
    }
}

/// Action handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthAction {
    CheckAuth,
    CheckError,
}

impl AuthAction {
    pub const ALL: [Self; 2] = [Self::CheckAuth, Self::CheckError];

    pub fn key(self) -> &'static str {
        match self {
            Self::CheckAuth => "checkAuth",
            Self::CheckError => "checkError",
        }
    }

    pub fn qualified(self) -> String {
        format!("{NAMESPACE}/{}", self.key())
    }
}

impl fmt::Display for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AuthAction {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = local_key(s)?;
        Self::ALL
            .into_iter()
            .find(|action| action.key() == key)
            .ok_or_else(|| KeyError::UnknownAction(s.to_owned()))
    }
}

/// Result of reading a getter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthValue<'a> {
    Name(Option<&'a str>),
    Email(Option<&'a str>),
    Permissions(&'a PermissionSet),
}

impl AuthValue<'_> {
    /// JSON form handed to non-Rust consumers (`null`, string, or array).
    pub fn to_json(&self) -> Value {
        match *self {
            Self::Name(value) | Self::Email(value) => value.map_or(Value::Null, |s| Value::String(s.to_owned())),
            Self::Permissions(set) => Value::Array(set.iter().cloned().map(Value::String).collect()),
        }
    }
}

/// Read `getter` from `provider`.
pub fn read<P>(provider: &P, getter: AuthGetter) -> AuthValue<'_>
where
    P: AuthProvider + ?Sized,
{
    match getter {
        AuthGetter::Name => AuthValue::Name(provider.name()),
        AuthGetter::Email => AuthValue::Email(provider.email()),
        AuthGetter::Permissions => AuthValue::Permissions(provider.permissions()),
    }
}

/// An action together with its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthCommand<'a> {
    CheckAuth(AuthContext<'a>),
    CheckError(AuthErrorContext<'a>),
}

impl AuthCommand<'_> {
    pub fn action(&self) -> AuthAction {
        match self {
            Self::CheckAuth(_) => AuthAction::CheckAuth,
            Self::CheckError(_) => AuthAction::CheckError,
        }
    }
}

/// Run `command` against `provider`.
pub fn dispatch<P>(provider: &P, command: &AuthCommand<'_>)
where
    P: AuthProvider + ?Sized,
{
    match command {
        AuthCommand::CheckAuth(ctx) => provider.check_auth(ctx),
        AuthCommand::CheckError(ctx) => provider.check_error(ctx),
    }
}
