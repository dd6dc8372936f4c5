//! Network error types.

use thiserror::Error;

/// Errors from outbound peer delivery.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The HTTP request to the peer failed at the transport level
    #[error("peer request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
