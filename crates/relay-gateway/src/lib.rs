//! # Relay Gateway - HTTP surface of the relay node
//!
//! Thin transport binding over the transaction pipeline.
//!
//! # Routes
//!
//! | Route | Method | Behavior |
//! |-------|--------|----------|
//! | `/transactions` | POST | Hand the parsed transaction to the pipeline; `200 {"status":"ok"}` for anything that parses, `400 {"error":…}` otherwise |
//! | `/transactions` | GET | Pool snapshot in insertion order |
//! | `/nodes` | POST | Register a peer base URL |
//! | `/nodes` | GET | Registered peers in registration order |
//!
//! Pipeline-level rejection is invisible at this layer: a transaction that
//! parses but fails validation still gets `200`. The gateway's only error
//! of its own is a body that does not deserialize.

pub mod error;
pub mod routes;
pub mod service;

pub use error::GatewayError;
pub use routes::{build_router, AppState};
pub use service::GatewayServer;
