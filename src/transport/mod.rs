//! Transport seam: executes one prepared request and hands back the buffered response.
//!
//! The client never talks to the network directly. Everything goes through a
//! [`Transport`], so tests can swap in a deterministic fake instead of sockets.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use std::borrow::Cow;
use std::time::Duration;
use url::Url;

/// Payload of a prepared request.
#[derive(Debug)]
pub enum RequestBody {
    /// Already encoded bytes, sent with the content type in the request headers.
    Bytes(Bytes),
    /// A form the transport encodes; it also sets the boundary content type.
    Multipart(reqwest::multipart::Form),
}

/// A fully built request, ready to be sent as-is.
#[derive(Debug)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
}

/// A response whose body has been drained completely.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Status line as the server would print it, e.g. `404 Not Found`.
    pub fn status_line(&self) -> String {
        match self.status.canonical_reason() {
            Some(reason) => format!("{} {}", self.status.as_u16(), reason),
            None => self.status.as_u16().to_string(),
        }
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Executes prepared requests. Implementations must be safe to share across tasks.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request cancelled")]
    Cancelled,

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Transport error: {0}")]
    Other(String),
}
