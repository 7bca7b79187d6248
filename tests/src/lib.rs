//! # Quantum-Chain Test Suite
//!
//! Unified test crate for the anchoring subsystem.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Window aggregation benchmarks
//! └── src/integration/  # End-to-end anchoring over HTTP
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qc-tests
//!
//! # Benchmarks
//! cargo bench -p qc-tests
//! ```

pub mod integration;
