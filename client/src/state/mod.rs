//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the session and its reducer, `actions` runs the operations
//! that feed it, and `toast` queues notifications for display.

pub mod actions;
pub mod auth;
pub mod toast;
