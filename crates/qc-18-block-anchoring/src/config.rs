//! # Anchoring Configuration
//!
//! Immutable for the lifetime of the process. Defaults leave anchoring
//! disabled; override via environment variables or explicit construction.

use crate::domain::{hex_bytes, ServiceSecret};
use shared_types::Address;
use std::env;
use url::Url;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Block anchoring configuration.
#[derive(Clone, Debug)]
pub struct AnchorConfig {
    /// Master switch. Nothing is anchored while false.
    pub enabled: bool,

    /// Anchor every `period`-th block; also the window length.
    pub period: u64,

    /// Anchoring service endpoint.
    pub service_url: Url,

    /// Basic-auth user.
    pub credential_id: String,

    /// Basic-auth password.
    pub credential_secret: ServiceSecret,

    /// Value of the `X-Krn` routing header.
    pub route_key: String,

    /// Operator account reported in every request.
    pub operator: Address,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Treat undecodable response bodies as failures instead of the
    /// zero-valued (successful) response.
    pub strict_response_decoding: bool,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            period: 1,
            service_url: default_service_url(),
            credential_id: String::new(),
            credential_secret: ServiceSecret::default(),
            route_key: String::new(),
            operator: [0u8; 20],
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            strict_response_decoding: false,
        }
    }
}

impl AnchorConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `QC_ANCHOR_ENABLED` (default: false)
    /// - `QC_ANCHOR_PERIOD` (default: 1)
    /// - `QC_ANCHOR_URL` (default: `http://localhost:8080/v1/anchor`)
    /// - `QC_ANCHOR_CREDENTIAL_ID`
    /// - `QC_ANCHOR_CREDENTIAL_SECRET`
    /// - `QC_ANCHOR_ROUTE_KEY`
    /// - `QC_ANCHOR_OPERATOR` (hex address, default: zero address)
    /// - `QC_ANCHOR_TIMEOUT_SECS` (default: 30)
    /// - `QC_ANCHOR_STRICT_DECODING` (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let service_url = match env::var("QC_ANCHOR_URL") {
            Ok(raw) => Url::parse(&raw)
                .map_err(|e| ConfigError::InvalidUrl("QC_ANCHOR_URL".to_string(), e.to_string()))?,
            Err(_) => defaults.service_url.clone(),
        };

        let operator = match env::var("QC_ANCHOR_OPERATOR") {
            Ok(raw) => hex_bytes::decode::<20>(&raw).map_err(ConfigError::InvalidOperator)?,
            Err(_) => defaults.operator,
        };

        let config = Self {
            enabled: env_bool("QC_ANCHOR_ENABLED")?.unwrap_or(defaults.enabled),
            period: env_u64("QC_ANCHOR_PERIOD")?.unwrap_or(defaults.period),
            service_url,
            credential_id: env::var("QC_ANCHOR_CREDENTIAL_ID").unwrap_or_default(),
            credential_secret: ServiceSecret::new(
                env::var("QC_ANCHOR_CREDENTIAL_SECRET").unwrap_or_default(),
            ),
            route_key: env::var("QC_ANCHOR_ROUTE_KEY").unwrap_or_default(),
            operator,
            timeout_secs: env_u64("QC_ANCHOR_TIMEOUT_SECS")?.unwrap_or(defaults.timeout_secs),
            strict_response_decoding: env_bool("QC_ANCHOR_STRICT_DECODING")?
                .unwrap_or(defaults.strict_response_decoding),
        };

        config.validate()?;
        Ok(config)
    }

    /// Create an enabled config for testing against `service_url`.
    pub fn for_testing(service_url: Url) -> Self {
        Self {
            enabled: true,
            period: 1,
            service_url,
            credential_id: "user".to_string(),
            credential_secret: ServiceSecret::new("pass"),
            route_key: "krn:1001:anchor:test:operator-pool:op1".to_string(),
            operator: [0x15; 20],
            timeout_secs: 5,
            strict_response_decoding: false,
        }
    }

    /// Builder-style period override.
    pub fn with_period(mut self, period: u64) -> Self {
        self.period = period;
        self
    }

    /// Builder-style enable switch.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Check the configuration before handing it to the service.
    ///
    /// # Errors
    ///
    /// - `InvalidPeriod` if `period` is zero
    /// - `MissingField` if anchoring is enabled without credentials or route key
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period == 0 {
            return Err(ConfigError::InvalidPeriod);
        }
        if self.enabled {
            if self.credential_id.is_empty() {
                return Err(ConfigError::MissingField("credential_id"));
            }
            if self.route_key.is_empty() {
                return Err(ConfigError::MissingField("route_key"));
            }
        }
        Ok(())
    }
}

/// Endpoint used when `QC_ANCHOR_URL` is unset.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8080/v1/anchor";

fn default_service_url() -> Url {
    Url::parse(DEFAULT_SERVICE_URL).expect("default anchoring URL is valid")
}

fn env_bool(var: &str) -> Result<Option<bool>, ConfigError> {
    match env::var(var) {
        Ok(v) => match v.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidValue(var.to_string(), v)),
        },
        Err(_) => Ok(None),
    }
}

fn env_u64(var: &str) -> Result<Option<u64>, ConfigError> {
    match env::var(var) {
        Ok(v) => v
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(var.to_string(), v)),
        Err(_) => Ok(None),
    }
}

/// Configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Anchoring period must be at least 1.
    #[error("anchoring period must be at least 1")]
    InvalidPeriod,

    /// Service URL could not be parsed.
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),

    /// Operator address is not 20 hex-encoded bytes.
    #[error("invalid operator address: {0}")]
    InvalidOperator(String),

    /// An environment variable had an unparseable value.
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),

    /// A field required while anchoring is enabled is empty.
    #[error("{0} is required when anchoring is enabled")]
    MissingField(&'static str),
}
