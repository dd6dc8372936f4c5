//! Pipeline error types.

use relay_crypto::CryptoError;
use thiserror::Error;

/// Errors surfaced by the pipeline's fallible operations.
///
/// Validation failures are NOT errors; they are silent-drop outcomes
/// reported as [`crate::RejectReason`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Key generation or signing failed while building a transaction
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// The transaction could not be serialized. Programmer-error class:
    /// should not occur for a well-formed transaction.
    #[error("failed to serialize transaction: {0}")]
    Serialization(#[from] serde_json::Error),
}
