//! # Shared Types Crate
//!
//! Chain entities shared by the node and its subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-subsystem chain types are defined here.
//! - **Read-only to consumers**: subsystems such as block anchoring only ever
//!   read blocks they receive; nothing here is mutated after construction.

pub mod entities;

pub use entities::*;
