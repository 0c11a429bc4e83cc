//! Frontend configuration

use crate::error::{Error, Result};
use crate::notify::ExpiryNotice;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Authentication constants shared by the store, client and controller
pub struct AuthConfig;

impl AuthConfig {
    /// Session liveness check interval in milliseconds
    pub const SESSION_CHECK_INTERVAL_MS: u32 = 60_000; // 1 minute

    /// How long the timed session-expired warning stays visible
    pub const EXPIRY_NOTICE_MS: u32 = 5_000;

    /// Local storage key for the JSON-serialized user
    pub const USER_KEY: &'static str = "user";

    /// Local storage key for the bearer token
    pub const TOKEN_KEY: &'static str = "token";

    /// Local storage key for the session identifier
    pub const SESSION_ID_KEY: &'static str = "sessionID";

    /// Header carrying the session identifier on logout
    pub const SESSION_HEADER: &'static str = "X-Session-ID";
}

/// Deployment environment selecting the API base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnvironment {
    #[default]
    Development,
    Docker,
    Production,
}

impl ApiEnvironment {
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::Development => "http://localhost:8080",
            Self::Docker => "/api",
            Self::Production => "",
        }
    }
}

impl FromStr for ApiEnvironment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "docker" => Ok(Self::Docker),
            "production" | "prod" => Ok(Self::Production),
            other => Err(Error::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for ApiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Docker => "docker",
            Self::Production => "production",
        };
        f.write_str(name)
    }
}

/// Where the API lives for the current deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub environment: ApiEnvironment,
    pub base_url: String,
    /// Per-request limit; only enforced on native targets
    #[serde(default = "ApiConfig::default_request_timeout")]
    pub request_timeout: Duration,
}

impl ApiConfig {
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    const fn default_request_timeout() -> Duration {
        Self::DEFAULT_REQUEST_TIMEOUT
    }

    /// Build from the raw environment selector and optional override.
    ///
    /// An absent selector means development. An empty override is ignored.
    pub fn from_values(environment: Option<&str>, base_url: Option<&str>) -> Result<Self> {
        let environment = match environment {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => ApiEnvironment::default(),
        };
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| environment.default_base_url())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            environment,
            base_url,
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Read the selector and override baked in at compile time
    pub fn from_build_env() -> Result<Self> {
        Self::from_values(
            option_env!("RANKBOARD_ENV"),
            option_env!("RANKBOARD_API_BASE_URL"),
        )
    }

    /// Absolute base URL, resolving relative ones against the page origin
    pub fn resolved_base_url(&self, origin: Option<&str>) -> Result<String> {
        if url::Url::parse(&self.base_url).is_ok() {
            return Ok(self.base_url.clone());
        }

        let origin = origin.ok_or_else(|| Error::InvalidBaseUrl(self.base_url.clone()))?;
        let origin =
            url::Url::parse(origin).map_err(|e| Error::InvalidBaseUrl(format!("{origin}: {e}")))?;
        let joined = origin
            .join(&self.base_url)
            .map_err(|e| Error::InvalidBaseUrl(format!("{}: {e}", self.base_url)))?;

        Ok(joined.as_str().trim_end_matches('/').to_string())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        let environment = ApiEnvironment::default();
        Self {
            environment,
            base_url: environment.default_base_url().to_string(),
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Session controller settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub poll_interval: Duration,
    pub expiry_notice: ExpiryNotice,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(u64::from(AuthConfig::SESSION_CHECK_INTERVAL_MS)),
            expiry_notice: ExpiryNotice::default(),
        }
    }
}
