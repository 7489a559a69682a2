//! REST client for the `/api/v1/user` endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport reports `ApiError::Unavailable`, which the
//! session store turns into the operation's generic fallback message.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is classified here, once, into an `ApiError`. The session
//! store only ever asks an `ApiError` for its user-facing message, so no
//! caller needs to inspect raw response bodies.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{AuthPayload, ErrorBody};

/// Path prefix shared by every user endpoint.
pub const API_PREFIX: &str = "/api/v1/user";

/// The five asynchronous operations the session store can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthOp {
    Register,
    Login,
    UpdateProfile,
    UpdatePassword,
    FetchCurrentUser,
}

impl AuthOp {
    pub const ALL: [Self; 5] = [
        Self::Register,
        Self::Login,
        Self::UpdateProfile,
        Self::UpdatePassword,
        Self::FetchCurrentUser,
    ];

    /// Last path segment of the endpoint.
    pub const fn action(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Login => "login",
            Self::UpdateProfile => "updatesetting",
            Self::UpdatePassword => "updatePassword",
            Self::FetchCurrentUser => "me",
        }
    }

    /// Reverse of [`AuthOp::action`]. Matching is exact.
    pub fn from_action(action: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.action() == action)
    }

    pub fn endpoint(self) -> String {
        format!("{API_PREFIX}/{}", self.action())
    }

    /// Whether the request is sent with `credentials: include`.
    pub const fn with_credentials(self) -> bool {
        matches!(self, Self::Register | Self::Login | Self::UpdateProfile)
    }

    /// Operations whose success response must carry a token.
    pub const fn issues_token(self) -> bool {
        matches!(self, Self::Register | Self::Login)
    }

    /// Operations whose success response must carry a user record.
    pub const fn replaces_user(self) -> bool {
        !matches!(self, Self::UpdatePassword)
    }

    /// Message used when no usable response arrived at all.
    pub const fn transport_fallback(self) -> &'static str {
        match self {
            Self::Register => "Failed to register user.",
            Self::Login => "Failed to login user.",
            Self::UpdateProfile => "Failed to update profile.",
            Self::UpdatePassword => "Failed to update Password.",
            Self::FetchCurrentUser => "Failed to Get User Details.",
        }
    }

    /// Message used when the server rejected the call without a `message`.
    pub const fn rejection_fallback(self) -> &'static str {
        match self {
            Self::Login => "Worng Password and Email",
            _ => "An unexpected error occurred.",
        }
    }

    /// Stable name for logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Login => "login",
            Self::UpdateProfile => "update_profile",
            Self::UpdatePassword => "update_password",
            Self::FetchCurrentUser => "fetch_current_user",
        }
    }
}

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server rejected request: status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The server answered with a non-success status and no body at all.
    #[error("server rejected request: status {status}, empty body")]
    EmptyRejection { status: u16 },

    /// A success response could not be turned into the expected payload.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// HTTP is only wired up in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// The text shown to the user for a failed `op`.
    pub fn user_message(&self, op: AuthOp) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.is_empty() => message.clone(),
            Self::Rejected { .. } => op.rejection_fallback().to_owned(),
            Self::Network(_) | Self::EmptyRejection { .. } | Self::Decode(_) | Self::Encode(_) | Self::Unavailable => {
                op.transport_fallback().to_owned()
            }
        }
    }
}

/// Classify a raw HTTP response.
///
/// # Errors
///
/// Returns `ApiError::EmptyRejection` for non-2xx statuses with a blank body,
/// `ApiError::Rejected` for other non-2xx statuses (carrying the body's
/// `message` when present) and `ApiError::Decode` for 2xx bodies that are not
/// a JSON object.
pub fn decode_response(status: u16, body: &str) -> Result<AuthPayload, ApiError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<AuthPayload>(body).map_err(|e| ApiError::Decode(e.to_string()));
    }
    if body.trim().is_empty() {
        return Err(ApiError::EmptyRejection { status });
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message);
    Err(ApiError::Rejected { status, message })
}

/// Transport used by the session operations.
pub trait AuthApi {
    /// POST `body` to `op`'s endpoint.
    fn post(&self, op: AuthOp, body: serde_json::Value) -> impl Future<Output = Result<AuthPayload, ApiError>>;
}

/// Same-origin `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    async fn post(&self, op: AuthOp, body: serde_json::Value) -> Result<AuthPayload, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::post(&op.endpoint());
            if op.with_credentials() {
                request = request.credentials(web_sys::RequestCredentials::Include);
            }
            let resp = request
                .json(&body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            decode_response(status, &text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (op, body);
            Err(ApiError::Unavailable)
        }
    }
}
