//! Gateway error types.

use thiserror::Error;

/// Errors from running the HTTP server itself.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The listen address could not be bound
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    /// The server terminated with an I/O error
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
