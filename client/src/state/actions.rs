//! Session operations: the async calls and synchronous mutations that drive
//! [`Session`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these instead of touching the session signal directly. Each
//! async operation dispatches `Pending`, awaits one HTTP call, then dispatches
//! exactly one of `Fulfilled` / `Rejected` and returns the same outcome to the
//! caller so it can navigate or reset its form.
//!
//! TRADE-OFFS
//! ==========
//! There is no cancellation and no de-duplication: two submits issue two
//! requests, and their settle events land in network order.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use leptos::prelude::*;
use serde::Serialize;

use super::auth::{AuthEvent, Session, Settled};
use crate::net::api::{ApiError, AuthApi, AuthOp};
use crate::net::types::{LoginCredentials, PasswordUpdate, ProfileUpdate, RegisterForm};
use crate::util::cookie::TokenStore;

/// Receiver of session events.
pub trait SessionSink {
    fn dispatch(&self, event: AuthEvent);
}

impl SessionSink for RwSignal<Session> {
    fn dispatch(&self, event: AuthEvent) {
        self.update(|session| session.apply(event));
    }
}

async fn run<A, S, B>(api: &A, sink: &S, op: AuthOp, body: &B) -> Result<Settled, String>
where
    A: AuthApi,
    S: SessionSink,
    B: Serialize,
{
    log::debug!("{} dispatched", op.label());
    sink.dispatch(AuthEvent::Pending(op));

    let outcome = match serde_json::to_value(body) {
        Ok(body) => api
            .post(op, body)
            .await
            .and_then(|payload| Settled::from_payload(op, payload)),
        Err(e) => Err(ApiError::Encode(e.to_string())),
    };

    match outcome {
        Ok(settled) => {
            log::debug!("{} fulfilled", op.label());
            sink.dispatch(AuthEvent::Fulfilled(op, settled.clone()));
            Ok(settled)
        }
        Err(err) => {
            let message = err.user_message(op);
            log::warn!("{} rejected: {err}", op.label());
            sink.dispatch(AuthEvent::Rejected(op, message.clone()));
            Err(message)
        }
    }
}

fn persist_token<T: TokenStore>(tokens: &T, settled: &Settled) {
    if let Settled::Session { token, .. } = settled {
        tokens.store(token);
    }
}

/// Create an account and sign in with it.
///
/// # Errors
///
/// Returns the user-facing failure message, which is also in `session.error`.
pub async fn register<A, S, T>(api: &A, sink: &S, tokens: &T, form: &RegisterForm) -> Result<Settled, String>
where
    A: AuthApi,
    S: SessionSink,
    T: TokenStore,
{
    let settled = run(api, sink, AuthOp::Register, form).await?;
    persist_token(tokens, &settled);
    Ok(settled)
}

/// Sign in with email and password.
///
/// # Errors
///
/// Returns the user-facing failure message, which is also in `session.error`.
pub async fn login<A, S, T>(api: &A, sink: &S, tokens: &T, credentials: &LoginCredentials) -> Result<Settled, String>
where
    A: AuthApi,
    S: SessionSink,
    T: TokenStore,
{
    let settled = run(api, sink, AuthOp::Login, credentials).await?;
    persist_token(tokens, &settled);
    Ok(settled)
}

/// Save profile fields. Callers check `is_authenticated` first.
///
/// # Errors
///
/// Returns the user-facing failure message, which is also in `session.error`.
pub async fn update_profile<A, S>(api: &A, sink: &S, fields: &ProfileUpdate) -> Result<Settled, String>
where
    A: AuthApi,
    S: SessionSink,
{
    run(api, sink, AuthOp::UpdateProfile, fields).await
}

/// Change the password.
///
/// # Errors
///
/// Returns the user-facing failure message, which is also in `session.error`.
pub async fn update_password<A, S>(api: &A, sink: &S, fields: &PasswordUpdate) -> Result<Settled, String>
where
    A: AuthApi,
    S: SessionSink,
{
    run(api, sink, AuthOp::UpdatePassword, fields).await
}

/// Load the signed-in user's record.
///
/// # Errors
///
/// Returns the user-facing failure message, which is also in `session.error`.
pub async fn fetch_current_user<A, S>(api: &A, sink: &S) -> Result<Settled, String>
where
    A: AuthApi,
    S: SessionSink,
{
    run(api, sink, AuthOp::FetchCurrentUser, &serde_json::json!({})).await
}

/// Forget the user and token, and drop the persisted cookie.
pub fn logout<S: SessionSink, T: TokenStore>(sink: &S, tokens: &T) {
    tokens.clear();
    sink.dispatch(AuthEvent::Logout);
}

pub fn clear_message<S: SessionSink>(sink: &S) {
    sink.dispatch(AuthEvent::ClearMessage);
}

pub fn clear_error<S: SessionSink>(sink: &S) {
    sink.dispatch(AuthEvent::ClearError);
}
