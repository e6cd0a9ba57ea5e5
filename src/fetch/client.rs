//! HTTP catalog client
//!
//! Wraps `reqwest` with the pipeline's fetch semantics: a bounded timeout,
//! typed errors for timeouts and non-2xx statuses, and validation that the
//! response body is a JSON array of records.

use crate::error::{Error, Result};
use crate::types::{json_type_name, Catalog, FetchFallback, JsonValue};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the catalog client
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// What to do when the fetch fails at the transport layer
    pub fallback: FetchFallback,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: format!("catalog-sync/{}", env!("CARGO_PKG_VERSION")),
            fallback: FetchFallback::default(),
        }
    }
}

/// HTTP client for fetching the catalog
pub struct CatalogClient {
    client: Client,
    config: FetchConfig,
}

impl CatalogClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(FetchConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: FetchConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Fetch the catalog, applying the configured fallback policy
    ///
    /// With [`FetchFallback::EmptyCatalog`], transport-layer failures
    /// (connection errors, timeouts, non-2xx statuses) are logged and
    /// produce an empty catalog so the rest of the pipeline still runs.
    /// Malformed or wrong-shaped payloads always propagate: the source
    /// answered, so silently dropping its response would hide a bug.
    pub async fn fetch(&self, url: &str) -> Result<Catalog> {
        match self.fetch_catalog(url).await {
            Ok(catalog) => Ok(catalog),
            Err(e) if self.config.fallback == FetchFallback::EmptyCatalog && e.is_transport() => {
                warn!("Catalog fetch failed, continuing with empty catalog: {e}");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch the catalog, propagating every failure
    pub async fn fetch_catalog(&self, url: &str) -> Result<Catalog> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                #[allow(clippy::cast_possible_truncation)]
                return Err(Error::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                });
            }
            Err(e) => return Err(Error::Http(e)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.text().await.map_err(Error::Http)?;
        let value: JsonValue = serde_json::from_str(&body)?;

        match value {
            JsonValue::Array(records) => {
                debug!("Fetched {} catalog records from {url}", records.len());
                Ok(records)
            }
            other => Err(Error::not_an_array(json_type_name(&other))),
        }
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
