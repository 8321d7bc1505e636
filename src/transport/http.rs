use super::{PreparedRequest, RawResponse, RequestBody, Transport, TransportError};
use async_trait::async_trait;
use reqwest::Proxy;
use std::env;
use std::time::Duration;

/// Pooled reqwest-backed transport used by default.
///
/// Deadlines are enforced by the client, not here, so the same timeout policy
/// applies to every [`Transport`] implementation.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        // Minimal production-friendly defaults (env-overridable).
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(
                env::var("GLADIA_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(32),
            )
            .pool_idle_timeout(Some(Duration::from_secs(
                env::var("GLADIA_HTTP_POOL_IDLE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(90),
            )))
            .connect_timeout(Duration::from_secs(10));

        if let Ok(proxy_url) = env::var("GLADIA_PROXY_URL") {
            match Proxy::all(&proxy_url) {
                Ok(proxy) => builder = builder.proxy(proxy),
                Err(e) => tracing::warn!("Ignoring invalid GLADIA_PROXY_URL: {}", e),
            }
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Other(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client (custom TLS, proxies, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        let builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        let builder = match request.body {
            Some(RequestBody::Bytes(bytes)) => builder.body(bytes),
            Some(RequestBody::Multipart(form)) => builder.multipart(form),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        // Drain the whole body before anyone tries to decode it.
        let body = response.bytes().await?;
        Ok(RawResponse { status, body })
    }
}
