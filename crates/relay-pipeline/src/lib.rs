//! # Transaction Pipeline Subsystem
//!
//! The ingestion path of the relay node. An inbound transaction flows:
//!
//! ```text
//! [HTTP gateway] ──→ validate ──→ memory pool ──→ broadcast to peers
//!                        │
//!                        └── reject ──→ logged, dropped silently
//! ```
//!
//! ## Contract
//!
//! - Ingestion is fire-and-forget: callers never see a validation failure.
//!   The structured [`RejectReason`] goes to the log (and is available to
//!   tests through [`TransactionService::validate`]).
//! - A transaction enters the pool only after every check passes, and is
//!   broadcast only after it entered the pool.
//! - Broadcast is best-effort and sequential: a peer that cannot be
//!   reached is logged and skipped, never aborting delivery to the rest.
//!
//! ## Ports
//!
//! The service composes five capability interfaces (`Pool`, `Signer`,
//! `PeerRegistry`, `PeerClient`, [`TimeSource`]), all injected by the
//! composition root, so tests can substitute deterministic doubles.

pub mod errors;
pub mod service;
pub mod time;
pub mod validation;

pub use errors::PipelineError;
pub use service::TransactionService;
pub use time::{SystemTimeSource, TimeSource};
pub use validation::RejectReason;
