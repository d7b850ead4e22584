//! MBTA v3 API HTTP client.

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::domain::RouteId;
use crate::source::{RouteSummary, TransitSource};

use super::error::MbtaError;
use super::types::{ResourcePage, RouteAttributes, StopAttributes};

/// Default base URL for the MBTA v3 API.
const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";

/// Route type filter selecting light rail (0) and heavy rail (1), i.e.
/// the subway.
const SUBWAY_ROUTE_TYPES: &str = "0,1";

/// Configuration for the MBTA client.
#[derive(Debug, Clone)]
pub struct MbtaConfig {
    /// API key, sent as the `x-api-key` header when present. The API
    /// accepts anonymous requests at a lower rate limit, so this is
    /// optional.
    pub api_key: Option<String>,
    /// Base URL for the API (defaults to production).
    pub base_url: String,
    /// Request timeout in seconds. When `None`, no timeout is configured
    /// and the transport default applies.
    pub timeout_secs: Option<u64>,
}

impl MbtaConfig {
    /// Create a config with defaults: anonymous access, production URL,
    /// no timeout.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }

    /// Set an API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for MbtaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the MBTA v3 API.
#[derive(Debug, Clone)]
pub struct MbtaClient {
    http: reqwest::Client,
    base_url: String,
}

impl MbtaClient {
    /// Create a new client from the given configuration.
    pub fn new(config: MbtaConfig) -> Result<Self, MbtaError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| MbtaError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
            headers.insert(HeaderName::from_static("x-api-key"), value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// GET a resource page and deserialize it.
    async fn get_page<A>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ResourcePage<A>, MbtaError>
    where
        A: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(MbtaError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MbtaError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MbtaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| MbtaError::Json {
            message: e.to_string(),
        })
    }
}

impl TransitSource for MbtaClient {
    async fn subway_routes(&self) -> Result<Vec<RouteSummary>, MbtaError> {
        let page: ResourcePage<RouteAttributes> = self
            .get_page("/routes", &[("filter[type]", SUBWAY_ROUTE_TYPES)])
            .await?;

        debug!(routes = page.data.len(), "fetched subway routes");

        Ok(page
            .data
            .into_iter()
            .map(|r| RouteSummary {
                id: RouteId::from(r.id),
                long_name: r.attributes.long_name,
            })
            .collect())
    }

    async fn stops_on_route(&self, route: &RouteId) -> Result<Vec<String>, MbtaError> {
        let page: ResourcePage<StopAttributes> = self
            .get_page("/stops", &[("filter[route]", route.as_str())])
            .await?;

        debug!(route = %route, stops = page.data.len(), "fetched stops");

        Ok(page
            .data
            .into_iter()
            .map(|s| s.attributes.name)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = MbtaConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn config_builder() {
        let config = MbtaConfig::new()
            .with_api_key("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(60);

        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, Some(60));
    }

    #[test]
    fn client_creation() {
        let client = MbtaClient::new(MbtaConfig::new());
        assert!(client.is_ok());

        let client = MbtaClient::new(MbtaConfig::new().with_api_key("some-key"));
        assert!(client.is_ok());
    }

    #[test]
    fn client_rejects_unprintable_api_key() {
        let client = MbtaClient::new(MbtaConfig::new().with_api_key("bad\nkey"));
        assert!(client.is_err());
    }

    // Integration tests against the live API would make real HTTP
    // requests; the rest of the crate is exercised through TransitSource
    // mocks instead.
}
