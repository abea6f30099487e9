//! Client configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// Default admin API base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Default request timeout. Media uploads can be slow.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 120_000;

/// Admin API client configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every request path is appended to, without a trailing `/`
    pub api_base_url: String,
    /// Timeout applied to every request
    pub request_timeout: Duration,
    /// Bearer token to start with, for headless use
    pub api_token: Option<String>,
}

/// Load `.env.local`, then `.env`. Variables already set are never overridden,
/// so `.env.local` wins over `.env`.
pub fn load_dotenv() {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(trimmed).with_context(|| format!("Invalid API base URL: {raw}"))?;
    Ok(trimmed.to_string())
}

impl ClientConfig {
    pub fn new(api_base_url: &str) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(api_base_url)?,
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            api_token: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url =
            lookup("CONFDESK_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let timeout_ms: u64 = lookup("CONFDESK_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| DEFAULT_REQUEST_TIMEOUT_MS.to_string())
            .trim()
            .parse()
            .context("CONFDESK_REQUEST_TIMEOUT_MS must be a whole number of milliseconds")?;
        let api_token = lookup("CONFDESK_API_TOKEN").filter(|t| !t.trim().is_empty());

        Ok(Self {
            api_base_url: normalize_base_url(&base_url)?,
            request_timeout: Duration::from_millis(timeout_ms),
            api_token,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            api_token: None,
        }
    }
}
