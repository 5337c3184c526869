#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "CONTENT_SEARCH_URL";
pub const ENV_TIMEOUT_SECS: &str = "CONTENT_SEARCH_TIMEOUT_SECS";
pub const ENV_CORS_HEADERS: &str = "CONTENT_SEARCH_CORS_HEADERS";

/// Connection settings for `ContentSearchClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Attach `Access-Control-Allow-*` headers to every request.
    ///
    /// These are response headers in CORS and have no standard effect when a
    /// client sends them. They stay on by default because existing BFF
    /// deployments have always received them.
    pub send_cors_headers: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
            send_cors_headers: true,
        }
    }
}

pub fn default_user_agent() -> String {
    format!("content-search-client/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Defaults overridden by `CONTENT_SEARCH_URL`, `CONTENT_SEARCH_TIMEOUT_SECS`
    /// and `CONTENT_SEARCH_CORS_HEADERS` when they are set.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            config.base_url = url;
        }

        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            config.timeout_secs =
                raw.trim()
                    .parse()
                    .map_err(|_| ApiError::InvalidConfigValue {
                        field: ENV_TIMEOUT_SECS.to_string(),
                        value: raw.clone(),
                        reason: "Expected a whole number of seconds".to_string(),
                    })?;
        }

        if let Ok(raw) = std::env::var(ENV_CORS_HEADERS) {
            config.send_cors_headers = parse_flag(ENV_CORS_HEADERS, &raw)?;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_cors_headers(mut self, enabled: bool) -> Self {
        self.send_cors_headers = enabled;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("client.base_url", &self.base_url)?;
        validation::validate_positive_number("client.timeout_secs", self.timeout_secs, 1)?;
        validation::validate_header_value("client.user_agent", &self.user_agent)?;
        Ok(())
    }
}

fn parse_flag(field: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ApiError::InvalidConfigValue {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "Expected true or false".to_string(),
        }),
    }
}
