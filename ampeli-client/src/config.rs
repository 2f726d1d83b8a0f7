//! Client configuration
//!
//! Explicit configuration passed to the client at construction; nothing is
//! read from ambient globals after that point.

/// Remote API client configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | AMPELI_API_URL | https://ampeli-backend.onrender.com/api | Remote API base URL |
/// | AMPELI_API_TIMEOUT_SECS | 30 | Per-request timeout |
/// | AMPELI_API_TOKEN | (none) | Bearer token, if already authenticated |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the remote API, without trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Optional bearer token
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
            token: None,
        }
    }

    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("AMPELI_API_URL")
                .unwrap_or_else(|_| "https://ampeli-backend.onrender.com/api".into()),
            timeout_secs: std::env::var("AMPELI_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            token: std::env::var("AMPELI_API_TOKEN").ok(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
