//! # Anchoring Flow
//!
//! Drives the anchoring service the way the node does: blocks are committed
//! one by one and handed to the periodic entry point, which posts window
//! summaries to a mock anchoring endpoint over real HTTP.
//!
//! ## Flows Tested:
//!
//! 1. **Commit → Anchor**: only period-aligned heights reach the endpoint
//! 2. **Window contents**: block and transaction counts match storage
//! 3. **Failure isolation**: rejections and outages never stop block processing

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use qc_18_block_anchoring::test_utils::make_test_block;
    use qc_18_block_anchoring::{
        AnchorConfig, AnchorError, AnchorOutcome, AnchorService, AnchoringApi,
        InMemoryAnchorStore, InMemoryBlockProvider, ReqwestTransport, SkipReason,
    };
    use quantum_telemetry::{init_logging, TelemetryConfig};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use serde_json::{json, Value};
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type NodeAnchoring = AnchorService<InMemoryBlockProvider, InMemoryAnchorStore, ReqwestTransport>;

    fn init_test_logging() {
        // Another test may have installed the subscriber already
        let _ = init_logging(&TelemetryConfig::for_subsystem("18"));
    }

    fn create_anchoring(
        server: &MockServer,
        period: u64,
    ) -> (NodeAnchoring, Arc<InMemoryBlockProvider>) {
        let url = Url::parse(&format!("{}/v1/anchor", server.uri())).expect("valid url");
        let storage = Arc::new(InMemoryBlockProvider::new());
        let service = AnchorService::with_reqwest(
            AnchorConfig::for_testing(url).with_period(period),
            storage.clone(),
            Arc::new(InMemoryAnchorStore::new()),
        )
        .expect("service build");
        (service, storage)
    }

    async fn mount_accepting(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/v1/anchor"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
            .mount(server)
            .await;
    }

    async fn received_payloads(server: &MockServer) -> Vec<Value> {
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| {
                let body: Value = serde_json::from_slice(&r.body).expect("json body");
                body["Payload"].clone()
            })
            .collect()
    }

    // =============================================================================
    // FLOW 1: Commit → Anchor
    // =============================================================================

    #[tokio::test]
    async fn test_only_period_aligned_heights_are_anchored() {
        init_test_logging();
        let server = MockServer::start().await;
        mount_accepting(&server).await;
        let (anchoring, storage) = create_anchoring(&server, 10);

        let mut anchored = Vec::new();
        for height in 0..=30 {
            let block = make_test_block(height, 1);
            storage.insert(block.clone());
            if let AnchorOutcome::Anchored { height } =
                anchoring.anchor_periodic_block(Some(&block)).await
            {
                anchored.push(height);
            }
        }

        assert_eq!(anchored, vec![0, 10, 20, 30]);
        let ids: Vec<Value> = received_payloads(&server)
            .await
            .into_iter()
            .map(|p| p["id"].clone())
            .collect();
        assert_eq!(ids, vec![json!("0"), json!("10"), json!("20"), json!("30")]);
    }

    // =============================================================================
    // FLOW 2: Window contents
    // =============================================================================

    #[tokio::test]
    async fn test_window_counts_match_committed_blocks() {
        let server = MockServer::start().await;
        mount_accepting(&server).await;
        let period = 7;
        let (anchoring, storage) = create_anchoring(&server, period);

        let mut rng = StdRng::seed_from_u64(7);
        let counts: Vec<usize> = (0..=21).map(|_| rng.gen_range(0..6)).collect();

        for (height, &count) in counts.iter().enumerate() {
            let block = make_test_block(height as u64, count);
            storage.insert(block.clone());
            anchoring.anchor_periodic_block(Some(&block)).await;
        }

        let payloads = received_payloads(&server).await;
        assert_eq!(payloads.len(), 4);
        for payload in payloads {
            let height = payload["blockNumber"].as_u64().expect("blockNumber");
            let start = height.saturating_sub(period - 1);
            let expected: usize = counts[start as usize..=height as usize].iter().sum();

            assert_eq!(payload["blockCount"], json!(height - start + 1));
            assert_eq!(payload["txCount"], json!(expected));
        }
    }

    // =============================================================================
    // FLOW 3: Failure isolation
    // =============================================================================

    #[tokio::test]
    async fn test_rejections_do_not_stop_processing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"code": 7, "result": "busy"})),
            )
            .expect(3)
            .mount(&server)
            .await;
        let (anchoring, storage) = create_anchoring(&server, 2);

        let mut failures = 0;
        for height in 1..=6 {
            let block = make_test_block(height, 0);
            storage.insert(block.clone());
            match anchoring.anchor_periodic_block(Some(&block)).await {
                AnchorOutcome::Failed {
                    error: AnchorError::ServiceRejection { code, .. },
                    ..
                } => {
                    assert_eq!(code, 7);
                    failures += 1;
                }
                AnchorOutcome::Skipped(reason) => assert_eq!(reason, SkipReason::OffPeriod),
                other => panic!("unexpected outcome: {other:?}"),
            }
        }
        assert_eq!(failures, 3);
    }

    #[tokio::test]
    async fn test_gap_in_storage_skips_network_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
            .expect(0)
            .mount(&server)
            .await;
        let (anchoring, storage) = create_anchoring(&server, 5);

        // Height 2 never reaches storage
        for height in [0, 1, 3, 4] {
            storage.insert(make_test_block(height, 1));
        }

        let outcome = anchoring
            .anchor_periodic_block(Some(&make_test_block(5, 1)))
            .await;
        assert_eq!(
            outcome,
            AnchorOutcome::Failed {
                height: 5,
                error: AnchorError::AggregationUnavailable {
                    height: 5,
                    missing_height: 2,
                },
            }
        );
    }
}
