//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and validation, then hands off to
//! `state::actions` for anything that touches the session.

pub mod account;
pub mod login;
pub mod password;
pub mod register;
pub mod settings;
