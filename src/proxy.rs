//! Same-origin pass-through to the user API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser posts to `/api/v1/user/{action}` on this host so the `token`
//! cookie and any `Set-Cookie` replies stay first-party. Only the actions the
//! UI knows about are forwarded; the body is relayed untouched in both
//! directions.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use portal_client::net::api::AuthOp;

use crate::state::AppState;

/// Request headers copied to the upstream call.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [CONTENT_TYPE, COOKIE, AUTHORIZATION];

/// Response headers copied back to the browser.
const RELAYED_RESPONSE_HEADERS: [HeaderName; 2] = [CONTENT_TYPE, SET_COOKIE];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("unknown user action: {0}")]
    UnknownAction(String),

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownAction(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Full upstream URL for `op` under `base`.
pub fn upstream_url(base: &str, op: AuthOp) -> String {
    format!("{base}{}", op.endpoint())
}

/// Copy every instance of `names` from `source`, preserving repeats.
pub fn filter_headers(source: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `POST /api/v1/user/{action}`: forward to the configured upstream.
pub async fn forward(
    State(state): State<AppState>,
    Path(action): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let op = AuthOp::from_action(&action).ok_or(ProxyError::UnknownAction(action))?;
    let url = upstream_url(&state.api_upstream, op);

    let upstream = state
        .http
        .post(&url)
        .headers(filter_headers(&headers, &FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(action = op.action(), error = %e, "user API unreachable");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let relayed = filter_headers(upstream.headers(), &RELAYED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(action = op.action(), error = %e, "user API body read failed");
        ProxyError::Upstream(e.to_string())
    })?;

    tracing::debug!(action = op.action(), status = status.as_u16(), "user API relayed");
    Ok((status, relayed, bytes).into_response())
}
