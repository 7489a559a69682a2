//! Helpers shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps browser access (the token cookie) and pure rules (form validation,
//! guard decisions) out of the views so they can be unit tested natively.

pub mod auth;
pub mod cookie;
pub mod validation;
