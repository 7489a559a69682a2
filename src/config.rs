//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM: &str = "http://127.0.0.1:8080";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to something that does not parse.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// The upstream base URL is not an http(s) URL.
    #[error("PORTAL_API_UPSTREAM must start with http:// or https://, got {0:?}")]
    UpstreamScheme(String),

    /// The outbound HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api_upstream: String,
    pub timeouts: UpstreamTimeouts,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PORTAL_API_UPSTREAM`: backend base URL, default `http://127.0.0.1:8080`
    /// - `PORTAL_UPSTREAM_TIMEOUT_SECS`: default 30
    /// - `PORTAL_UPSTREAM_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let api_upstream = lookup("PORTAL_API_UPSTREAM")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_UPSTREAM.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !(api_upstream.starts_with("http://") || api_upstream.starts_with("https://")) {
            return Err(ConfigError::UpstreamScheme(api_upstream));
        }

        let timeouts = UpstreamTimeouts {
            request_secs: parse_or(
                "PORTAL_UPSTREAM_TIMEOUT_SECS",
                lookup("PORTAL_UPSTREAM_TIMEOUT_SECS"),
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )?,
            connect_secs: parse_or(
                "PORTAL_UPSTREAM_CONNECT_TIMEOUT_SECS",
                lookup("PORTAL_UPSTREAM_CONNECT_TIMEOUT_SECS"),
                DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self { port, api_upstream, timeouts })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
