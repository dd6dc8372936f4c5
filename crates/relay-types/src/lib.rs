//! # Relay Types Crate
//!
//! Shared domain entities for the Tx-Relay node.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the wire shape of a [`Transaction`] is
//!   defined here and nowhere else.
//! - **Codec-only**: this crate carries no validation policy. Whether a
//!   transaction is acceptable is the pipeline's decision, not the codec's.

pub mod transaction;

pub use transaction::Transaction;
