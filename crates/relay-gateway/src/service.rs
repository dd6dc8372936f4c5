//! Gateway server lifecycle.

use std::net::SocketAddr;

use tracing::info;

use crate::error::GatewayError;
use crate::routes::{build_router, AppState};

/// Owns the listen address and router; serves until the process stops.
pub struct GatewayServer {
    addr: SocketAddr,
    state: AppState,
}

impl GatewayServer {
    /// Creates a server for the given address and application state.
    pub fn new(addr: SocketAddr, state: AppState) -> Self {
        Self { addr, state }
    }

    /// Binds the listener and serves requests. Runs until the server is
    /// torn down with the process; there is no graceful drain to perform
    /// since the node holds no persistent state.
    pub async fn serve(self) -> Result<(), GatewayError> {
        info!(addr = %self.addr, "starting HTTP server");

        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(GatewayError::Bind)?;
        axum::serve(listener, build_router(self.state))
            .await
            .map_err(GatewayError::Serve)
    }
}
