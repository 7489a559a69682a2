//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest` client for the user API and the upstream base
//! URL it talks to.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{ConfigError, ServerConfig};

/// Clone is required by Axum; both fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub api_upstream: Arc<str>,
}

impl AppState {
    /// Build the outbound client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the TLS backend fails to initialise.
    pub fn new(config: &ServerConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_upstream: Arc::from(config.api_upstream.as_str()) })
    }
}
