//! Node configuration.
//!
//! Static defaults with optional environment overrides. No config files:
//! the node has two knobs and restarts are cheap.

use std::net::SocketAddr;

/// Runtime configuration for the relay node.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Advertised base URL of this node.
    pub base_url: String,
    /// Port the HTTP gateway listens on.
    pub listen_port: u16,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9991".to_string(),
            listen_port: 9991,
        }
    }
}

impl NodeConfig {
    /// Loads configuration: defaults, overridden by `RELAY_PORT` and
    /// `RELAY_BASE_URL` when set.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("RELAY_PORT") {
            if let Ok(port) = port.parse() {
                config.listen_port = port;
            }
        }
        if let Ok(base_url) = std::env::var("RELAY_BASE_URL") {
            config.base_url = base_url;
        }

        config
    }

    /// Socket address the gateway binds.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.listen_port))
    }
}
