//! # Outbound Peer Client
//!
//! Delivers a serialized transaction to one peer with a single HTTP POST.
//! No authentication, no response inspection, no retry: each request either
//! completes or is abandoned, and the caller logs and moves on.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::errors::NetworkError;

/// Capability interface for transaction delivery to a single peer.
#[async_trait]
pub trait PeerClient: Send + Sync {
    /// POSTs `body` (a JSON-encoded transaction) to `<peer>/transactions`.
    ///
    /// # Errors
    /// `Transport` if the request could not be completed. The peer's
    /// response status and body are not inspected.
    async fn send_transaction(&self, peer: &str, body: Vec<u8>) -> Result<(), NetworkError>;
}

/// HTTP implementation of [`PeerClient`].
#[derive(Debug, Clone, Default)]
pub struct HttpPeerClient {
    http: reqwest::Client,
}

impl HttpPeerClient {
    /// Creates a client with default transport settings.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PeerClient for HttpPeerClient {
    async fn send_transaction(&self, peer: &str, body: Vec<u8>) -> Result<(), NetworkError> {
        let url = format!("{}/transactions", peer.trim_end_matches('/'));
        debug!(url = %url, "relaying transaction to peer");

        self.http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        Ok(())
    }
}
