//! Anchoring Service - Core business logic
//!
//! Wires the gate, window aggregation and payload building to the outbound
//! ports and implements [`AnchoringApi`].

use crate::adapters::ReqwestTransport;
use crate::algorithms::{build_payload, encode_request, gate_decision, summarize};
use crate::config::AnchorConfig;
use crate::domain::{
    AnchorError, AnchorOutcome, AnchorResult, Payload, ServiceResponse, SkipReason,
};
use crate::ports::inbound::AnchoringApi;
use crate::ports::outbound::{
    AnchorStore, BasicAuth, BlockProvider, HttpTransport, OutboundRequest, TransportResponse,
};
use async_trait::async_trait;
use quantum_telemetry::{log_block_event, log_event};
use shared_types::Block;
use std::sync::Arc;
use std::time::Duration;

/// Subsystem tag attached to every log line.
pub const SUBSYSTEM: &str = "qc-18";

/// Routing header understood by the anchoring service.
pub const ROUTE_KEY_HEADER: &str = "X-Krn";

/// Block anchoring service.
///
/// Holds no mutable state; concurrent calls are independent.
pub struct AnchorService<B, S, T>
where
    B: BlockProvider,
    S: AnchorStore,
    T: HttpTransport,
{
    config: AnchorConfig,
    block_provider: Arc<B>,
    anchor_store: Arc<S>,
    transport: Arc<T>,
}

impl<B, S, T> AnchorService<B, S, T>
where
    B: BlockProvider,
    S: AnchorStore,
    T: HttpTransport,
{
    /// Create new anchoring service
    pub fn new(
        config: AnchorConfig,
        block_provider: Arc<B>,
        anchor_store: Arc<S>,
        transport: Arc<T>,
    ) -> Self {
        Self {
            config,
            block_provider,
            anchor_store,
            transport,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &AnchorConfig {
        &self.config
    }

    /// Watermark store handed in at construction.
    ///
    /// The anchoring path neither reads nor advances it.
    pub fn anchor_store(&self) -> &Arc<S> {
        &self.anchor_store
    }

    fn build_request(&self, payload: &Payload) -> AnchorResult<OutboundRequest> {
        let body = encode_request(&self.config.operator, payload)?;
        Ok(OutboundRequest {
            url: self.config.service_url.clone(),
            headers: vec![(ROUTE_KEY_HEADER.to_string(), self.config.route_key.clone())],
            basic_auth: BasicAuth {
                username: self.config.credential_id.clone(),
                password: self.config.credential_secret.expose().to_string(),
            },
            body,
        })
    }

    /// Decode the first `{code, result}` value of the body regardless of
    /// HTTP status.
    ///
    /// Outside strict mode an undecodable body counts as the zero-valued
    /// response, i.e. success.
    fn decode_response(
        &self,
        height: u64,
        response: &TransportResponse,
    ) -> AnchorResult<ServiceResponse> {
        match ServiceResponse::decode_first(&response.body) {
            Ok(decoded) => Ok(decoded),
            Err(e) if self.config.strict_response_decoding => {
                Err(AnchorError::MalformedResponse {
                    height,
                    reason: e,
                })
            }
            Err(e) => {
                log_event!(
                    debug,
                    SUBSYSTEM,
                    "Undecodable anchoring response treated as success",
                    block_height = height,
                    http_status = response.status,
                    error = %e
                );
                Ok(ServiceResponse::default())
            }
        }
    }
}

impl<B, S> AnchorService<B, S, ReqwestTransport>
where
    B: BlockProvider,
    S: AnchorStore,
{
    /// Validate `config` and build a service over a `reqwest` transport
    /// using the configured timeout.
    pub fn with_reqwest(
        config: AnchorConfig,
        block_provider: Arc<B>,
        anchor_store: Arc<S>,
    ) -> AnchorResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::new(
            config,
            block_provider,
            anchor_store,
            Arc::new(transport),
        ))
    }
}

#[async_trait]
impl<B, S, T> AnchoringApi for AnchorService<B, S, T>
where
    B: BlockProvider,
    S: AnchorStore,
    T: HttpTransport,
{
    async fn anchor_periodic_block(&self, block: Option<&Block>) -> AnchorOutcome {
        let block = match gate_decision(&self.config, block) {
            Ok(block) => block,
            Err(reason) => {
                match reason {
                    SkipReason::Disabled => {}
                    SkipReason::MissingBlock => {
                        log_event!(warn, SUBSYSTEM, "No block handed to periodic anchoring")
                    }
                    SkipReason::InvalidPeriod => {
                        log_event!(warn, SUBSYSTEM, "Anchoring period is zero; nothing anchored")
                    }
                    SkipReason::OffPeriod => log_event!(
                        trace,
                        SUBSYSTEM,
                        "Block is off-period",
                        period = self.config.period
                    ),
                }
                return AnchorOutcome::Skipped(reason);
            }
        };

        let height = block.height();
        match self.anchor_block(block).await {
            Ok(()) => AnchorOutcome::Anchored { height },
            Err(error) => {
                log_block_event!(
                    warn,
                    SUBSYSTEM,
                    "Failed to anchor a block",
                    height,
                    hex::encode(block.hash()),
                    error = %error
                );
                AnchorOutcome::Failed { height, error }
            }
        }
    }

    async fn anchor_block(&self, block: &Block) -> AnchorResult<()> {
        let height = block.height();

        let summary = summarize(block, self.config.period, self.block_provider.as_ref())?;
        let (block_count, tx_count) = (summary.block_count, summary.tx_count);
        let request = self.build_request(&build_payload(summary))?;

        let response = self.transport.send(request).await?;
        let decoded = self.decode_response(height, &response)?;

        if !decoded.is_success() {
            log_event!(
                debug,
                SUBSYSTEM,
                "Anchoring service rejected block",
                block_height = height,
                code = decoded.code,
                result = %decoded.result
            );
            return Err(AnchorError::ServiceRejection {
                height,
                code: decoded.code,
                result: decoded.result,
            });
        }

        log_block_event!(
            info,
            SUBSYSTEM,
            "Anchored block",
            height,
            hex::encode(block.hash()),
            block_count = block_count,
            tx_count = tx_count
        );
        Ok(())
    }

    fn should_anchor(&self, block: Option<&Block>) -> bool {
        gate_decision(&self.config, block).is_ok()
    }
}
