//! Utility helpers shared across admin UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps Leptos context and routing plumbing out of the state modules so the
//! providers stay plain, testable values.

pub mod auth;
