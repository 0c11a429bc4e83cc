//! Rankboard API client

pub mod auth;
pub mod rankings;
pub mod error;

use error::ClientError;
use rankboard_core::{AuthConfig, KeyValueStore};
use reqwest::{Client, ClientBuilder, header};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::types::ErrorBody;

/// Supplies the bearer token for each outgoing request
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Reads the token from the persisted session on every call
#[derive(Clone)]
pub struct StoredToken(Arc<dyn KeyValueStore>);

impl StoredToken {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self(store)
    }
}

impl TokenSource for StoredToken {
    fn token(&self) -> Option<String> {
        self.0
            .get(AuthConfig::TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }
}

/// Rankboard API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Option<Arc<dyn TokenSource>>,
}

impl ApiClient {
    /// Create a client without a token source
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder, attaching the current bearer token if any
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = self.tokens.as_ref().and_then(|source| source.token()) {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        #[cfg(target_arch = "wasm32")]
        {
            request = request.fetch_credentials_include();
        }

        request
    }

    /// Execute a request and decode a JSON body
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = Self::send(request).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Execute a request whose body does not matter
    pub async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        Self::send(request).await.map(drop)
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let response_url = response.url().clone();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                if text.trim().is_empty() {
                    status.to_string()
                } else {
                    text
                }
            });
        debug!(%status, url = %response_url, %message, "API request failed");
        Err(ClientError::from_status(status, message))
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    tokens: Option<Arc<dyn TokenSource>>,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set where bearer tokens come from
    #[must_use]
    pub fn token_source(mut self, tokens: Arc<dyn TokenSource>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Set the request timeout (ignored on wasm)
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client. The base URL must be absolute.
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        url::Url::parse(&base_url)
            .map_err(|e| ClientError::Configuration(format!("invalid base_url {base_url}: {e}")))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = self.timeout {
                client_builder = client_builder.timeout(timeout);
            }
            client_builder = client_builder
                .user_agent(concat!("rankboard-client/", env!("CARGO_PKG_VERSION")));
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout; // Timeouts not supported on WASM

        let client = client_builder.build()?;

        Ok(ApiClient {
            client,
            base_url,
            tokens: self.tokens,
        })
    }
}
