//! # Transaction Service
//!
//! Application service implementing the ingestion pipeline over the
//! injected ports. Holds no per-request state; safe to share across
//! concurrent inbound requests.

use std::sync::Arc;

use relay_crypto::Signer;
use relay_mempool::Pool;
use relay_network::{PeerClient, PeerRegistry};
use relay_types::Transaction;
use tracing::{debug, info, warn};

use crate::errors::PipelineError;
use crate::time::TimeSource;
use crate::validation::RejectReason;

/// The transaction ingestion pipeline.
pub struct TransactionService {
    pool: Arc<dyn Pool>,
    signer: Arc<dyn Signer>,
    registry: Arc<dyn PeerRegistry>,
    peer_client: Arc<dyn PeerClient>,
    clock: Arc<dyn TimeSource>,
}

impl TransactionService {
    /// Wires the pipeline to its collaborators. The composition root owns
    /// the instances; the pipeline only holds references.
    pub fn new(
        pool: Arc<dyn Pool>,
        signer: Arc<dyn Signer>,
        registry: Arc<dyn PeerRegistry>,
        peer_client: Arc<dyn PeerClient>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        Self {
            pool,
            signer,
            registry,
            peer_client,
            clock,
        }
    }

    /// Ingestion entry point: validate, store, broadcast.
    ///
    /// Fire-and-forget: a transaction that fails validation is logged with
    /// its [`RejectReason`] and dropped; the caller is not told. Broadcast
    /// failures are likewise non-fatal.
    pub async fn add_transaction(&self, tx: Transaction) {
        info!("received new transaction");

        if let Err(reason) = self.validate(&tx) {
            warn!(
                %reason,
                recipient = %tx.recipient,
                amount = tx.amount,
                "dropping invalid transaction"
            );
            return;
        }

        debug!("adding transaction to memory pool");
        self.pool.add_transaction(tx.clone());

        if let Err(err) = self.broadcast_transaction(&tx).await {
            warn!(%err, "transaction broadcast failed");
        }
    }

    /// Runs the ordered short-circuit validation checks. The first failing
    /// check determines the reason.
    pub fn validate(&self, tx: &Transaction) -> Result<(), RejectReason> {
        if tx.amount <= 0 {
            return Err(RejectReason::InvalidAmount);
        }
        if tx.recipient.is_empty() {
            return Err(RejectReason::InvalidRecipient);
        }
        if tx.signature.is_empty() {
            return Err(RejectReason::MissingSignature);
        }
        if tx.public_key.is_empty() {
            return Err(RejectReason::MissingPublicKey);
        }
        if tx.timestamp > self.clock.now_unix() {
            return Err(RejectReason::FutureTimestamp);
        }
        self.verify_signature(tx)
    }

    fn verify_signature(&self, tx: &Transaction) -> Result<(), RejectReason> {
        // The signature covers only the unsigned fields.
        let Ok(payload) = tx.signing_payload() else {
            return Err(RejectReason::BadSignature);
        };
        let digest = self.signer.hash(&payload);

        if self
            .signer
            .verify_signature(&tx.public_key, &digest, &tx.signature)
        {
            Ok(())
        } else {
            Err(RejectReason::BadSignature)
        }
    }

    /// Convenience constructor: builds, signs, and returns a transaction
    /// ready for ingestion, using a freshly generated keypair and the
    /// current time.
    pub fn create_and_sign_transaction(
        &self,
        amount: i64,
        recipient: &str,
    ) -> Result<Transaction, PipelineError> {
        let keypair = self.signer.generate_keypair()?;

        let mut tx = Transaction::unsigned(self.clock.now_unix(), recipient, amount);
        let digest = self.signer.hash(&tx.signing_payload()?);

        tx.signature = self.signer.sign(&keypair, &digest)?;
        tx.public_key = keypair.public_key_bytes().to_vec();
        Ok(tx)
    }

    /// Relays `tx` to every registered peer, sequentially and best-effort.
    ///
    /// A peer that cannot be reached is logged and skipped. The only hard
    /// failure is the transaction failing to serialize, which cannot
    /// happen for a transaction that came through the codec.
    pub async fn broadcast_transaction(&self, tx: &Transaction) -> Result<(), PipelineError> {
        let body = serde_json::to_vec(tx)?;
        let peers = self.registry.nodes();
        if peers.is_empty() {
            return Ok(());
        }

        info!(peer_count = peers.len(), "broadcasting transaction");
        for peer in peers {
            if let Err(err) = self.peer_client.send_transaction(&peer, body.clone()).await {
                warn!(peer = %peer, %err, "failed to relay transaction to peer");
            }
        }
        Ok(())
    }
}
