//! Request dispatch: the single place where requests get their credential,
//! are sent through the transport, and have their status and body interpreted.

use crate::client::core::{GladiaClient, API_KEY_HEADER};
use crate::client::types::CallContext;
use crate::transport::{PreparedRequest, RawResponse, RequestBody, TransportError};
use crate::upload::form;
use crate::{Error, Result};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Statuses treated as success by every operation.
pub const ACCEPTED_STATUSES: [StatusCode; 2] = [StatusCode::OK, StatusCode::CREATED];

impl GladiaClient {
    /// Send a JSON request and decode the response into `T`.
    ///
    /// Without a payload the request carries neither a body nor a content type.
    pub(crate) async fn send_json<B, T>(
        &self,
        ctx: &CallContext,
        operation: &'static str,
        method: Method,
        segments: &[&str],
        payload: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = payload
            .map(serde_json::to_vec)
            .transpose()?
            .map(|json| RequestBody::Bytes(Bytes::from(json)));
        let content_type = body.as_ref().map(|_| "application/json");
        let request = self.prepare(method, segments, content_type, body)?;
        let response = self.execute(ctx, operation, request).await?;
        Self::decode_response(operation, response)
    }

    /// Send a single-part form with `content` under the `audio` field.
    ///
    /// The transport sets the multipart content type. The raw response is
    /// returned; callers run it through [`Self::decode_response`].
    pub(crate) async fn send_multipart(
        &self,
        ctx: &CallContext,
        operation: &'static str,
        segments: &[&str],
        content: &[u8],
        filename: &str,
    ) -> Result<RawResponse> {
        let audio = form::audio_form(filename, content)?;
        let request = self.prepare(
            Method::POST,
            segments,
            None,
            Some(RequestBody::Multipart(audio)),
        )?;
        self.execute(ctx, operation, request).await
    }

    /// Accept 200/201 and decode the fully buffered body; anything else is an error
    /// carrying the body verbatim.
    pub(crate) fn decode_response<T: DeserializeOwned>(
        operation: &'static str,
        response: RawResponse,
    ) -> Result<T> {
        if !ACCEPTED_STATUSES.contains(&response.status) {
            warn!(
                operation,
                status = response.status.as_u16(),
                "request rejected by remote service"
            );
            return Err(Error::UnexpectedStatus {
                operation,
                status: response.status.as_u16(),
                status_line: response.status_line(),
                body: response.text().into_owned(),
            });
        }

        serde_json::from_slice(&response.body).map_err(|source| Error::Decode {
            operation,
            body: response.text().into_owned(),
            source,
        })
    }

    fn prepare(
        &self,
        method: Method,
        segments: &[&str],
        content_type: Option<&str>,
        body: Option<RequestBody>,
    ) -> Result<PreparedRequest> {
        let url = self.endpoint(segments)?;

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, self.api_key.clone());
        if let Some(content_type) = content_type {
            let value = HeaderValue::from_str(content_type).map_err(|e| {
                Error::configuration(format!("Invalid content type {:?}: {}", content_type, e))
            })?;
            headers.insert(CONTENT_TYPE, value);
        }

        Ok(PreparedRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Run one request under the call's deadline and cancellation token.
    async fn execute(
        &self,
        ctx: &CallContext,
        operation: &'static str,
        request: PreparedRequest,
    ) -> Result<RawResponse> {
        if ctx.is_cancelled() {
            return Err(Error::transport(operation, TransportError::Cancelled));
        }

        let limit = ctx.effective_timeout(self.timeout);
        debug!(
            operation,
            method = %request.method,
            url = %request.url,
            "dispatching request"
        );

        let call = tokio::time::timeout(limit, self.transport.execute(request));
        let outcome = match ctx.cancellation() {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(operation, "request cancelled");
                    return Err(Error::transport(operation, TransportError::Cancelled));
                }
                outcome = call => outcome,
            },
            None => call.await,
        };

        let response = match outcome {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(Error::transport(operation, e)),
            Err(_) => return Err(Error::transport(operation, TransportError::Timeout(limit))),
        };

        debug!(
            operation,
            status = response.status.as_u16(),
            bytes = response.body.len(),
            "response received"
        );
        Ok(response)
    }
}
