//! # Transaction Pool
//!
//! Append-only store with strictly serialized access. Reads copy the
//! current contents out under the lock; no iteration escapes it.

use parking_lot::Mutex;
use relay_types::Transaction;
use tracing::debug;

/// Capability interface over the pool so tests can substitute their own.
pub trait Pool: Send + Sync {
    /// Appends a pre-validated transaction.
    ///
    /// Validation is the pipeline's responsibility; this method trusts its
    /// caller and never rejects.
    fn add_transaction(&self, tx: Transaction);

    /// Snapshot of all stored transactions in insertion order. An empty
    /// pool yields an empty vec.
    fn transactions(&self) -> Vec<Transaction>;
}

/// The in-memory pool. One mutex serializes every read and write.
#[derive(Debug, Default)]
pub struct MemoryPool {
    inner: Mutex<Vec<Transaction>>,
}

impl MemoryPool {
    /// Creates a new empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored transactions.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if the pool holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Pool for MemoryPool {
    fn add_transaction(&self, tx: Transaction) {
        debug!(recipient = %tx.recipient, amount = tx.amount, "adding transaction to memory pool");
        self.inner.lock().push(tx);
    }

    fn transactions(&self) -> Vec<Transaction> {
        debug!("reading transactions from memory pool");
        self.inner.lock().clone()
    }
}
