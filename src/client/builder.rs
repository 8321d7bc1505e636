use crate::client::core::{GladiaClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ErrorContext, Result};
use reqwest::header::HeaderValue;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Builder for [`GladiaClient`].
///
/// Explicit values win over the environment:
/// - `GLADIA_API_KEY` when no API key is given
/// - `GLADIA_HTTP_TIMEOUT_SECS` when no timeout is given (default 30)
pub struct GladiaClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl GladiaClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: None,
            transport: None,
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the service root (mock servers, proxies). Defaults to `https://api.gladia.io/`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send requests through a preconfigured reqwest client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.transport = Some(Arc::new(HttpTransport::with_client(client)));
        self
    }

    /// Replace the network layer entirely.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<GladiaClient> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var("GLADIA_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API key required (GLADIA_API_KEY)",
                    ErrorContext::new()
                        .with_field_path("api_key")
                        .with_source("client_builder"),
                )
            })?;
        let mut api_key = HeaderValue::from_str(&api_key).map_err(|e| {
            Error::configuration_with_context(
                "API key is not a valid header value",
                ErrorContext::new()
                    .with_field_path("api_key")
                    .with_details(e.to_string())
                    .with_source("client_builder"),
            )
        })?;
        api_key.set_sensitive(true);

        let raw_base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(raw_base_url.clone())
                    .with_source("client_builder"),
            )
        })?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                "Base URL must be an http(s) URL",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(raw_base_url)
                    .with_source("client_builder"),
            ));
        }

        let timeout = self
            .timeout
            .or_else(|| {
                std::env::var("GLADIA_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs)
            })
            .unwrap_or(DEFAULT_TIMEOUT);

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new().map_err(|e| {
                Error::configuration(format!("Failed to create HTTP client: {}", e))
            })?),
        };

        Ok(GladiaClient {
            base_url,
            api_key,
            transport,
            timeout,
        })
    }
}

impl Default for GladiaClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
