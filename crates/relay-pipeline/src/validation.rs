//! Structured rejection reasons.
//!
//! The HTTP caller never sees these; they exist for the log and for tests.

use thiserror::Error;

/// Why a transaction was dropped, in check order. The first failing check
/// wins; order matters only for which reason gets logged, not for the
/// outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// Amount was zero or negative
    #[error("amount must be positive")]
    InvalidAmount,

    /// Recipient was empty
    #[error("recipient must not be empty")]
    InvalidRecipient,

    /// No signature bytes present
    #[error("signature is missing")]
    MissingSignature,

    /// No public key bytes present
    #[error("public key is missing")]
    MissingPublicKey,

    /// Timestamp lies in the future
    #[error("timestamp is in the future")]
    FutureTimestamp,

    /// Signature did not verify against the unsigned fields
    #[error("signature does not verify")]
    BadSignature,
}
