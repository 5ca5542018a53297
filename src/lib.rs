//! # admin-auth
//!
//! Authorization state for the admin panel frontend.
//!
//! The host application talks to a single [`state::provider::AuthProvider`]
//! contract (name, email, permissions, `check_auth`, `check_error`) and picks
//! the backend at composition time. [`state::guest::GuestAuth`] is the
//! logged-out branch: it never has an identity and never fails.
//!
//! Leptos wiring (context signal, unauthenticated redirect) lives in
//! [`util::auth`].

pub mod config;
pub mod state;
pub mod types;
pub mod util;
