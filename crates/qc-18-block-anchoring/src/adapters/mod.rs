//! # Adapters Module
//!
//! Concrete implementations of the outbound ports.

pub mod anchor_store;
pub mod block_provider;
pub mod http_transport;

pub use anchor_store::InMemoryAnchorStore;
pub use block_provider::InMemoryBlockProvider;
pub use http_transport::ReqwestTransport;
