//! # Relay Network Crate
//!
//! The network edge of the relay node, split into two small ports:
//!
//! - [`PeerRegistry`]: the mutable list of known peer base URLs. Grows via
//!   explicit registration, never shrinks, keeps duplicates. There is no
//!   discovery protocol.
//! - [`PeerClient`]: fire-and-forget delivery of a serialized transaction
//!   to one peer. Delivery is best-effort; the caller decides what a
//!   failure means.

pub mod client;
pub mod errors;
pub mod registry;

pub use client::{HttpPeerClient, PeerClient};
pub use errors::NetworkError;
pub use registry::{InMemoryPeerRegistry, PeerRegistry};
