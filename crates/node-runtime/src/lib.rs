//! # Tx-Relay Node Runtime
//!
//! The composition root for the relay node.
//!
//! ## Wiring
//!
//! ```text
//! NodeRuntime
//!   ├── MemoryPool            (one instance, owned here)
//!   ├── InMemoryPeerRegistry  (one instance, owned here)
//!   ├── P256Signer
//!   ├── HttpPeerClient
//!   ├── SystemTimeSource
//!   ├── TransactionService    (holds Arcs of all of the above)
//!   └── GatewayServer         (HTTP surface over the service)
//! ```
//!
//! There is no package-level mutable state: the runtime owns the single
//! pool and registry instances and injects them into the pipeline and the
//! gateway.

pub mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use relay_crypto::P256Signer;
use relay_gateway::{AppState, GatewayServer};
use relay_mempool::MemoryPool;
use relay_network::{HttpPeerClient, InMemoryPeerRegistry};
use relay_pipeline::{SystemTimeSource, TransactionService};

pub use config::NodeConfig;

/// The assembled relay node.
pub struct NodeRuntime {
    config: NodeConfig,
    pool: Arc<MemoryPool>,
    registry: Arc<InMemoryPeerRegistry>,
    pipeline: Arc<TransactionService>,
}

impl NodeRuntime {
    /// Builds all subsystems and wires them together.
    pub fn new(config: NodeConfig) -> Self {
        info!("creating tx-relay node runtime");

        let pool = Arc::new(MemoryPool::new());
        let registry = Arc::new(InMemoryPeerRegistry::new());
        let pipeline = Arc::new(TransactionService::new(
            pool.clone(),
            Arc::new(P256Signer::new()),
            registry.clone(),
            Arc::new(HttpPeerClient::new()),
            Arc::new(SystemTimeSource),
        ));

        Self {
            config,
            pool,
            registry,
            pipeline,
        }
    }

    /// State handed to the HTTP gateway.
    pub fn app_state(&self) -> AppState {
        AppState {
            pipeline: self.pipeline.clone(),
            pool: self.pool.clone(),
            registry: self.registry.clone(),
        }
    }

    /// The transaction pipeline, for callers embedding the node.
    pub fn pipeline(&self) -> Arc<TransactionService> {
        self.pipeline.clone()
    }

    /// Runs the HTTP gateway until the process stops.
    pub async fn start(&self) -> Result<()> {
        info!("===========================================");
        info!("  Tx-Relay Node v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");
        info!(base_url = %self.config.base_url, port = self.config.listen_port, "configuration loaded");

        let server = GatewayServer::new(self.config.listen_addr(), self.app_state());
        server.serve().await.context("HTTP gateway terminated")
    }
}
