//! # Integration Tests
//!
//! Anchoring flows across block storage, the anchoring service and a
//! mock HTTP endpoint.

pub mod anchoring_flow;
