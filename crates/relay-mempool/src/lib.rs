//! # Memory Pool Subsystem
//!
//! Stores transactions accepted by the validation pipeline until some
//! downstream consumer (out of scope here) picks them up.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | Insertion order preserved | `Vec` append in `pool.rs` |
//! | Only validated transactions appear | callers validate; the pool trusts them |
//! | No interleaved mutation | single `Mutex` over the whole pool |
//!
//! The pool is append-only: no expiry, no eviction, no dedup. Resubmitting
//! an identical transaction yields a second entry.

pub mod pool;

pub use pool::{MemoryPool, Pool};
