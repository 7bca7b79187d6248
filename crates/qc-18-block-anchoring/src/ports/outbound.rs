//! # Outbound Ports
//!
//! Traits for external dependencies (block storage, watermark store,
//! HTTP transport).

use crate::domain::TransportError;
use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::Block;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;

/// Read access to committed blocks - outbound port.
pub trait BlockProvider: Send + Sync {
    /// Fetch the block at `height`, if it is stored.
    fn get_block_by_number(&self, height: u64) -> Option<Block>;
}

/// Last-anchored-height watermark - outbound port.
///
/// Held by the service for operators; the anchoring path does not read it.
pub trait AnchorStore: Send + Sync {
    /// Last height recorded as anchored (0 if none).
    fn read_last_anchored(&self) -> u64;

    /// Record `height` as the last anchored height.
    fn write_last_anchored(&self, height: u64);
}

/// Basic-auth credentials attached to an outbound request.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    /// User name.
    pub username: String,
    /// Password.
    pub password: String,
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A fully-built HTTP POST request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundRequest {
    /// Target endpoint.
    pub url: Url,
    /// Extra headers, in insertion order.
    pub headers: Vec<(String, String)>,
    /// Basic-auth credentials.
    pub basic_auth: BasicAuth,
    /// JSON request body.
    pub body: Vec<u8>,
}

impl OutboundRequest {
    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw HTTP response. The status is informational only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// 200 response carrying a JSON body.
    pub fn json(body: &serde_json::Value) -> Self {
        Self {
            status: 200,
            body: body.to_string().into_bytes(),
        }
    }
}

/// HTTP transport - outbound port.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `request` as an HTTP POST and return the raw response.
    async fn send(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock transport for testing.
///
/// Records every request and replays scripted responses in order. Once the
/// script is exhausted it answers `{"code": 0, "result": null}`.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<OutboundRequest>>,
    responses: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
}

impl MockTransport {
    /// Create a mock that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next response.
    pub fn push_response(&self, response: Result<TransportResponse, TransportError>) {
        self.responses.lock().push_back(response);
    }

    /// Queue a JSON `{code, result}` response.
    pub fn push_code(&self, code: i64, result: serde_json::Value) {
        self.push_response(Ok(TransportResponse::json(
            &serde_json::json!({ "code": code, "result": result }),
        )));
    }

    /// Requests sent so far.
    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests sent so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().push(request);
        self.responses.lock().pop_front().unwrap_or_else(|| {
            Ok(TransportResponse::json(
                &serde_json::json!({ "code": 0, "result": null }),
            ))
        })
    }
}

/// Mock block provider for testing.
///
/// Serves a fixed set of blocks and counts every lookup.
#[derive(Default)]
pub struct MockBlockProvider {
    blocks: HashMap<u64, Block>,
    lookups: AtomicUsize,
}

impl MockBlockProvider {
    /// Serve `blocks`, keyed by their heights.
    pub fn new(blocks: impl IntoIterator<Item = Block>) -> Self {
        Self {
            blocks: blocks.into_iter().map(|b| (b.height(), b)).collect(),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Number of `get_block_by_number` calls so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl BlockProvider for MockBlockProvider {
    fn get_block_by_number(&self, height: u64) -> Option<Block> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.blocks.get(&height).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> OutboundRequest {
        OutboundRequest {
            url: Url::parse("http://localhost/anchor").unwrap(),
            headers: vec![("X-Krn".to_string(), "krn:1".to_string())],
            basic_auth: BasicAuth {
                username: "user".to_string(),
                password: "pass".to_string(),
            },
            body: b"{}".to_vec(),
        }
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let request = sample_request();
        assert_eq!(request.header("x-krn"), Some("krn:1"));
        assert_eq!(request.header("Authorization"), None);
    }

    #[test]
    fn test_basic_auth_debug_redacts_password() {
        let rendered = format!("{:?}", sample_request().basic_auth);
        assert!(rendered.contains("user"));
        assert!(!rendered.contains("pass\""));
    }

    #[tokio::test]
    async fn test_mock_transport_replays_script() {
        let transport = MockTransport::new();
        transport.push_code(42, serde_json::Value::Null);
        transport.push_response(Err(TransportError::Timeout));

        let first = transport.send(sample_request()).await.unwrap();
        assert!(String::from_utf8_lossy(&first.body).contains("42"));
        assert_eq!(
            transport.send(sample_request()).await,
            Err(TransportError::Timeout)
        );
        // Script exhausted: default success
        let third = transport.send(sample_request()).await.unwrap();
        assert_eq!(third.status, 200);
        assert_eq!(transport.call_count(), 3);
    }

    #[test]
    fn test_mock_block_provider_counts_lookups() {
        let provider = MockBlockProvider::new(vec![Block::default()]);
        assert!(provider.get_block_by_number(0).is_some());
        assert!(provider.get_block_by_number(1).is_none());
        assert_eq!(provider.lookup_count(), 2);
    }
}
