//! Configuration module
//!
//! Client configuration is read from the environment (optionally seeded from a `.env`
//! file). Every variable has a `COURSEHUB_` name and a shorter fallback.

use std::env;

use anyhow::{anyhow, Context};

const DEFAULT_API_URL: &str = "http://localhost:3000/api";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// Settings for the HTTP client that talks to the course backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to, without a trailing slash
    pub api_url: String,
    /// Pre-issued token sent as `Authorization: Bearer {token}`
    pub api_token: Option<String>,
    pub http_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load from process environment: COURSEHUB_API_URL (or API_URL),
    /// COURSEHUB_API_TOKEN (or API_TOKEN), COURSEHUB_HTTP_TIMEOUT_SECS.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("COURSEHUB_API_URL")
            .or_else(|| lookup("API_URL"))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let api_token = lookup("COURSEHUB_API_TOKEN")
            .or_else(|| lookup("API_TOKEN"))
            .filter(|token| !token.trim().is_empty());

        let http_timeout_secs = match lookup("COURSEHUB_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("COURSEHUB_HTTP_TIMEOUT_SECS is not a number: {raw}"))?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let config = Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_token,
            http_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(anyhow!(
                "API URL must start with http:// or https://, got: {}",
                self.api_url
            ));
        }
        if self.http_timeout_secs == 0 {
            return Err(anyhow!("COURSEHUB_HTTP_TIMEOUT_SECS must be greater than 0"));
        }
        Ok(())
    }
}
