//! # Reqwest Transport
//!
//! [`HttpTransport`] over a pooled `reqwest` client with a fixed request
//! timeout.
//!
//! The response status is passed through untouched; interpreting the body
//! is the caller's job.

use crate::domain::TransportError;
use crate::ports::{HttpTransport, OutboundRequest, TransportResponse};
use async_trait::async_trait;
use std::time::Duration;

/// HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                TransportError::InvalidRequest(format!("failed to build HTTP client: {e}"))
            })?;
        Ok(Self { client })
    }
}

fn map_send_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_builder() {
        TransportError::InvalidRequest(e.to_string())
    } else {
        TransportError::Connection(e.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .client
            .post(request.url)
            .basic_auth(
                &request.basic_auth.username,
                Some(&request.basic_auth.password),
            )
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let resp = builder
            .body(request.body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(map_send_error)?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}
