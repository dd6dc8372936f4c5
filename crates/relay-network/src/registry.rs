//! # Peer Registry
//!
//! Ordered list of peer base URLs. Registration is administrative and rare
//! relative to broadcast reads, so the list sits behind an `RwLock` and
//! reads hand out snapshots.

use parking_lot::RwLock;
use tracing::info;

/// Capability interface over the registry.
pub trait PeerRegistry: Send + Sync {
    /// Appends a peer base URL. No well-formedness check, no dedup.
    fn register_node(&self, address: String);

    /// Snapshot of the registered addresses at call time, in registration
    /// order.
    fn nodes(&self) -> Vec<String>;
}

/// In-memory registry. Empty at start, grows for the life of the process.
#[derive(Debug, Default)]
pub struct InMemoryPeerRegistry {
    nodes: RwLock<Vec<String>>,
}

impl InMemoryPeerRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PeerRegistry for InMemoryPeerRegistry {
    fn register_node(&self, address: String) {
        info!(peer = %address, "registering peer node");
        self.nodes.write().push(address);
    }

    fn nodes(&self) -> Vec<String> {
        self.nodes.read().clone()
    }
}
