//! # QC-18 Block Anchoring
//!
//! Periodic commitment of chain summaries to an external anchoring service.
//!
//! **Subsystem ID:** 18  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Every `period`-th committed block, summarize the trailing window of up
//! to `period` blocks and POST it to the anchoring service:
//! - Gate on the enabled switch and `height % period == 0`
//! - Count blocks and transactions over the window
//! - Submit `{operator, Payload}` with basic auth and the `X-Krn` route key
//!
//! Anchoring is best-effort. The periodic entry point logs failures and
//! never propagates them to block processing.
//!
//! ## Failure Semantics
//!
//! | Situation | Result |
//! |-----------|--------|
//! | Disabled, off-period, no block | Skipped, no network call |
//! | Window block missing | `AggregationUnavailable`, no network call |
//! | Network failure | `Transport`, single attempt |
//! | `code != 0` | `ServiceRejection` |
//! | Undecodable body | Success (or `MalformedResponse` in strict mode) |
//!
//! ## Module Structure
//!
//! ```text
//! qc-18-block-anchoring/
//! ├── domain/          # WindowSummary, Payload, outcomes, errors
//! ├── algorithms/      # Gate, window aggregation, payload building
//! ├── ports/           # AnchoringApi, BlockProvider, AnchorStore, HttpTransport
//! ├── adapters/        # reqwest transport, in-memory provider and store
//! ├── config.rs        # AnchorConfig
//! └── service.rs       # AnchorService
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

/// Block fixtures for tests.
///
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-exports
pub use adapters::{InMemoryAnchorStore, InMemoryBlockProvider, ReqwestTransport};
pub use algorithms::{
    build_payload, encode_request, gate_decision, should_anchor, summarize, window_start,
};
pub use config::{AnchorConfig, ConfigError, DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT_SECS};
pub use domain::{
    AnchorError, AnchorOutcome, AnchorRequest, AnchorResult, Payload, ServiceResponse,
    ServiceSecret, SkipReason, TransportError, WindowSummary, CODE_OK,
};
pub use ports::{
    AnchorStore, AnchoringApi, BasicAuth, BlockProvider, HttpTransport, MockBlockProvider,
    MockTransport, OutboundRequest, TransportResponse,
};
pub use service::{AnchorService, ROUTE_KEY_HEADER, SUBSYSTEM};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
