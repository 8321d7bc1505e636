use crate::transport::Transport;
use crate::{Error, ErrorContext, Result};
use reqwest::header::HeaderValue;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.gladia.io/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the API key on every request.
pub(crate) const API_KEY_HEADER: &str = "x-gladia-key";

/// Client for the Gladia pre-recorded transcription API.
///
/// Cloning is cheap and clones share the transport. All operations take `&self`,
/// so one client can serve concurrent calls as long as the transport allows it
/// (the default [`HttpTransport`](crate::transport::HttpTransport) does).
#[derive(Clone)]
pub struct GladiaClient {
    pub(crate) base_url: Url,
    pub(crate) api_key: HeaderValue,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) timeout: Duration,
}

impl GladiaClient {
    /// Client with default base URL, timeout and HTTP transport.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub fn builder() -> crate::client::builder::GladiaClientBuilder {
        crate::client::builder::GladiaClientBuilder::new()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Change the timeout applied to every subsequent call.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Resolve `segments` below the base URL. Each segment is percent-encoded;
    /// a trailing empty segment produces a trailing slash.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::configuration_with_context(
                    "Base URL cannot carry a path",
                    ErrorContext::new()
                        .with_field_path("base_url")
                        .with_details(self.base_url.as_str()),
                )
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl fmt::Debug for GladiaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GladiaClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
