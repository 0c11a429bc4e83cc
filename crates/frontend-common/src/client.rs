//! Client configuration and initialization

use rankboard_core::{ApiConfig, KeyValueStore};
use rankboard_http::{ApiClient, ClientError, StoredToken};
use std::sync::Arc;
use tracing::info;

/// Origin of the current page, when running in a browser
pub fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.location().origin().ok())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Build the app's single API client.
///
/// Relative base URLs (docker, production) are resolved against the page
/// origin. Bearer tokens are read from `store` on every request. The
/// configured request timeout applies on native targets.
pub fn create_api_client(
    config: &ApiConfig,
    store: Arc<dyn KeyValueStore>,
) -> Result<ApiClient, ClientError> {
    let origin = page_origin();
    let base_url = config
        .resolved_base_url(origin.as_deref())
        .map_err(|e| ClientError::Configuration(e.to_string()))?;

    info!(environment = %config.environment, %base_url, "Creating API client");

    ApiClient::builder()
        .base_url(base_url)
        .token_source(Arc::new(StoredToken::new(store)))
        .timeout(config.request_timeout)
        .build()
}
