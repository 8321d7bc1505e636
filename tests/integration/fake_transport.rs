//! Deterministic transports for exercising the client without sockets.

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use gladia_client::transport::{
    PreparedRequest, RawResponse, RequestBody, Transport, TransportError,
};
use gladia_client::GladiaClient;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const TEST_API_KEY: &str = "test-gladia-key";

/// What the fake saw of one request. Multipart forms are encoded by the real
/// transport only, so for those just the boundary is kept.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: url::Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    pub form_boundary: Option<String>,
}

impl From<PreparedRequest> for RecordedRequest {
    fn from(request: PreparedRequest) -> Self {
        let (body, form_boundary) = match request.body {
            Some(RequestBody::Bytes(bytes)) => (Some(bytes), None),
            Some(RequestBody::Multipart(form)) => (None, Some(form.boundary().to_string())),
            None => (None, None),
        };
        Self {
            method: request.method,
            url: request.url,
            headers: request.headers,
            body,
            form_boundary,
        }
    }
}

/// Replays scripted responses in order and records every request it receives.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: impl Into<String>) {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.responses
            .lock()
            .unwrap()
            .push_back(RawResponse::new(status, body.into()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("at least one request")
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request.into());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::Other("no scripted response left".to_string()))
    }
}

/// Never answers; used to observe cancellation and deadlines.
pub struct PendingTransport;

#[async_trait]
impl Transport for PendingTransport {
    async fn execute(&self, _request: PreparedRequest) -> Result<RawResponse, TransportError> {
        std::future::pending().await
    }
}

pub fn client_with(transport: Arc<dyn Transport>) -> GladiaClient {
    GladiaClient::builder()
        .api_key(TEST_API_KEY)
        .transport(transport)
        .build()
        .expect("client builds")
}

pub fn header<'a>(request: &'a RecordedRequest, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}
