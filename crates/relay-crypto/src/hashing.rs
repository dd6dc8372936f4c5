//! # SHA-256 Hashing
//!
//! Deterministic digests of signing payloads. The digest is the message
//! that actually gets signed; the raw payload never touches the curve.

use sha2::{Digest as _, Sha256};

/// SHA-256 hash output (256-bit).
pub type Digest = [u8; 32];

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
