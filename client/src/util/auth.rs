//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same rule: render when a user is present,
//! otherwise redirect. The rule looks only at the user; it does not wait for an
//! in-flight `fetch_current_user`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Where unauthenticated visitors are sent when no redirect is supplied.
pub const DEFAULT_REDIRECT: &str = "/login";

/// Outcome of a route-guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(String),
}

/// Decide whether a protected view may render.
pub fn guard_decision(has_user: bool, redirect: Option<&str>) -> GuardDecision {
    if has_user {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(redirect.unwrap_or(DEFAULT_REDIRECT).to_owned())
    }
}
