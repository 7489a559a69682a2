//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard, the toast host, and every form page. The app owns
//! one `RwSignal<Session>` in context; all writes go through
//! [`Session::apply`], a pure reducer over [`AuthEvent`].
//!
//! DESIGN
//! ======
//! `is_authenticated` and `is_loading` are derived rather than stored, so the
//! "authenticated iff token present" rule holds by construction. Cookie
//! persistence is a side effect of the operation runner (`state::actions`),
//! never of the reducer.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::{ApiError, AuthOp};
use crate::net::types::{AuthPayload, User};

/// Client-held authentication and profile state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub error: Option<String>,
    pub message: Option<String>,
    in_flight: u32,
}

/// Typed result of a fulfilled operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Settled {
    /// Register / login: a fresh user and credential token.
    Session { user: User, token: String },
    /// Profile update / current-user fetch: replacement user record.
    User(User),
    /// Password update: nothing to store.
    Done,
}

impl Settled {
    /// Shape a success payload for `op`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` when the payload lacks the user or token the
    /// operation must produce.
    pub fn from_payload(op: AuthOp, payload: AuthPayload) -> Result<Self, ApiError> {
        let AuthPayload { user, token } = payload;
        if op.issues_token() {
            let user = user.ok_or_else(|| ApiError::Decode("response missing user".to_owned()))?;
            let token = token
                .filter(|t| !t.is_empty())
                .ok_or_else(|| ApiError::Decode("response missing token".to_owned()))?;
            return Ok(Self::Session { user, token });
        }
        if op.replaces_user() {
            let user = user.ok_or_else(|| ApiError::Decode("response missing user".to_owned()))?;
            return Ok(Self::User(user));
        }
        Ok(Self::Done)
    }
}

/// Every state transition the session can undergo.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthEvent {
    Pending(AuthOp),
    Fulfilled(AuthOp, Settled),
    Rejected(AuthOp, String),
    Logout,
    ClearMessage,
    ClearError,
}

impl AuthOp {
    /// Toast text shown after `self` succeeds.
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Register => "Registration successful! Welcome!",
            Self::Login => "Login successful! Welcome back!",
            Self::UpdateProfile => "Profile updated successfully!",
            Self::UpdatePassword => "Password updated successfully!",
            Self::FetchCurrentUser => " WellCome to your Profile!",
        }
    }
}

impl Session {
    /// Session at startup: the persisted token (if any) and no user yet.
    pub fn restore(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.is_empty()), ..Self::default() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// True while at least one operation is between dispatch and settlement.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn has_user(&self) -> bool {
        self.user.is_some()
    }

    /// Apply one event in place.
    pub fn apply(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::Pending(_) => {
                self.in_flight = self.in_flight.saturating_add(1);
                self.error = None;
                self.message = None;
            }
            AuthEvent::Fulfilled(op, settled) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                match settled {
                    Settled::Session { user, token } => {
                        self.user = Some(user);
                        self.token = Some(token);
                    }
                    Settled::User(user) => self.user = Some(user),
                    Settled::Done => {}
                }
                self.message = Some(op.success_message().to_owned());
            }
            AuthEvent::Rejected(_, error) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.error = Some(error);
            }
            AuthEvent::Logout => {
                self.user = None;
                self.token = None;
                self.error = None;
                self.message = None;
                self.in_flight = 0;
            }
            AuthEvent::ClearMessage => self.message = None,
            AuthEvent::ClearError => self.error = None,
        }
    }

    /// Reducer form of [`Session::apply`]: `(state, event) -> state`.
    #[must_use]
    pub fn reduce(mut self, event: AuthEvent) -> Self {
        self.apply(event);
        self
    }
}
