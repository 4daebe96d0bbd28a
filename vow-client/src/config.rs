//! Client configuration

use crate::{ClientError, ClientResult, HttpClient};

/// Configuration for talking to the wedding API
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | VOW_API_URL | http://localhost:3000/api | API base URL |
/// | VOW_API_TOKEN | (none) | Bearer token |
/// | VOW_API_TIMEOUT | 30 | Request timeout, seconds |
/// | VOW_WEDDING_ID | (required) | Wedding whose data is edited |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:3000/api")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Wedding the website and seating endpoints are scoped to
    pub wedding_id: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, wedding_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            wedding_id: wedding_id.into(),
        }
    }

    /// Load from the environment, reading `.env` first if present
    pub fn from_env() -> ClientResult<Self> {
        dotenvy::dotenv().ok();

        let wedding_id = std::env::var("VOW_WEDDING_ID")
            .map_err(|_| ClientError::Config("VOW_WEDDING_ID is not set".to_string()))?;
        let base_url =
            std::env::var("VOW_API_URL").unwrap_or_else(|_| "http://localhost:3000/api".into());

        let mut config = Self::new(base_url, wedding_id);
        if let Ok(token) = std::env::var("VOW_API_TOKEN") {
            config.token = Some(token);
        }
        if let Ok(timeout) = std::env::var("VOW_API_TIMEOUT") {
            config.timeout = timeout.parse().map_err(|_| {
                ClientError::Config(format!("VOW_API_TIMEOUT is not a number: {timeout}"))
            })?;
        }
        Ok(config)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<HttpClient> {
        HttpClient::new(self)
    }

    /// Path of the wedding resource below the base URL
    pub(crate) fn wedding_path(&self, resource: &str) -> String {
        format!("weddings/{}/{}", self.wedding_id, resource)
    }
}
