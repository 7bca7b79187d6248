//! # Algorithms Module
//!
//! Pure anchoring algorithms: gating, window aggregation, payload building.

pub mod gate;
pub mod payload;
pub mod window;

pub use gate::{gate_decision, should_anchor};
pub use payload::{build_payload, encode_request};
pub use window::{summarize, window_start};
