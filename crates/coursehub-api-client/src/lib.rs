//! HTTP client for the course backend.
//!
//! Provides a minimal client with optional Bearer auth, generic GET/POST/PUT helpers,
//! and the course domain methods in [`api`]. The form and CLI crates use this client
//! through the `CourseService` trait.

pub mod api;

use std::time::Duration;

use anyhow::{Context, Result};
use coursehub_core::ClientConfig;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Authentication strategy for the API.
#[derive(Clone, Debug, Default)]
pub enum Auth {
    #[default]
    None,
    /// `Authorization: Bearer {token}`
    Bearer(String),
}

/// HTTP client for the course API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth: Auth,
}

impl ApiClient {
    pub fn new(base_url: String, auth: Auth, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let auth = match &config.api_token {
            Some(token) => Auth::Bearer(token.clone()),
            None => Auth::None,
        };
        Self::new(
            config.api_url.clone(),
            auth,
            Duration::from_secs(config.http_timeout_secs),
        )
    }

    /// Create client from environment, see [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env().context("Invalid client configuration")?;
        Self::from_config(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Auth::None => request,
            Auth::Bearer(token) => request.header("Authorization", format!("Bearer {}", token)),
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self
            .apply_auth(request)
            .send()
            .await
            .context("Failed to send request")?;
        ensure_success(response).await
    }

    /// GET request. Deserializes JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        let response = self.send(self.client.get(&url)).await?;
        response
            .json()
            .await
            .context("Failed to parse response as JSON")
    }

    /// POST JSON body. The response body is not read.
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.build_url(path);
        self.send(self.client.post(&url).json(body)).await?;
        Ok(())
    }

    /// PUT JSON body. The response body is not read.
    pub async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.build_url(path);
        self.send(self.client.put(&url).json(body)).await?;
        Ok(())
    }

    /// POST multipart form and deserialize response.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let url = self.build_url(path);
        let response = self.send(self.client.post(&url).multipart(form)).await?;
        response
            .json()
            .await
            .context("Failed to parse response as JSON")
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(anyhow::anyhow!(
        "API request failed with status {}: {}",
        status,
        error_text
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = ApiClient::new(
            "http://localhost:3000/api/".to_string(),
            Auth::None,
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
        assert_eq!(
            client.build_url("/courses/1"),
            "http://localhost:3000/api/courses/1"
        );
    }

    #[test]
    fn from_config_uses_token_as_bearer() {
        let config = ClientConfig {
            api_token: Some("tok".to_string()),
            ..ClientConfig::default()
        };
        let client = ApiClient::from_config(&config).unwrap();
        assert!(matches!(client.auth, Auth::Bearer(ref t) if t == "tok"));
        assert_eq!(client.base_url(), "http://localhost:3000/api");
    }
}
