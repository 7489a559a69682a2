//! Networking modules for the user API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and classifies failures, `types` defines the
//! JSON bodies exchanged with the backend.

pub mod api;
pub mod types;
