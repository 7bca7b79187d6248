//! # Domain Module
//!
//! Core domain types for Block Anchoring.

pub mod entities;
pub mod errors;
pub mod hex_bytes;
pub mod secret;

pub use entities::*;
pub use errors::*;
pub use secret::ServiceSecret;
