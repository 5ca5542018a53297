//! Client-side authorization state.
//!
//! DESIGN
//! ======
//! `provider` defines the contract, `guest` and `session` are the two
//! backends, `auth` composes them for the host, and `keys` exposes the same
//! surface under namespaced string keys.

pub mod auth;
pub mod guest;
pub mod keys;
pub mod provider;
pub mod session;
