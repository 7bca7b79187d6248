//! # Domain Errors
//!
//! Error types for Block Anchoring.
//!
//! Skipping a block is not an error; see [`super::SkipReason`].

use crate::config::ConfigError;
use thiserror::Error;

/// Result type alias for anchoring operations.
pub type AnchorResult<T> = Result<T, AnchorError>;

/// Failures of the HTTP round trip itself.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection could not be established or was interrupted.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be constructed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Anchoring error types.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AnchorError {
    /// A block inside the trailing window could not be retrieved.
    ///
    /// No payload is built and no network call is made.
    #[error("Window for block {height} unavailable: block {missing_height} not found")]
    AggregationUnavailable {
        /// Height being anchored
        height: u64,
        /// First height the block provider could not serve
        missing_height: u64,
    },

    /// The network call failed.
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The service answered with a nonzero status code.
    #[error("Anchoring service rejected block {height}: error code {code}")]
    ServiceRejection {
        /// Height being anchored
        height: u64,
        /// Status code returned by the service
        code: i64,
        /// Opaque result returned by the service
        result: serde_json::Value,
    },

    /// The request body could not be encoded.
    #[error("Request serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be decoded (strict decoding only).
    #[error("Malformed response for block {height}: {reason}")]
    MalformedResponse {
        /// Height being anchored
        height: u64,
        /// Decoder message
        reason: String,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AnchorError {
    /// Height the error refers to, when it is tied to one block.
    pub fn height(&self) -> Option<u64> {
        match self {
            Self::AggregationUnavailable { height, .. }
            | Self::ServiceRejection { height, .. }
            | Self::MalformedResponse { height, .. } => Some(*height),
            Self::Transport(_) | Self::Serialization(_) | Self::Config(_) => None,
        }
    }
}
