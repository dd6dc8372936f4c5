//! # Transaction Entity
//!
//! The unit of work flowing through the relay: received over HTTP, validated
//! by the pipeline, stored in the memory pool, and relayed to peers.
//!
//! ## Wire Shape
//!
//! Transactions travel as JSON with the byte fields hex-encoded:
//!
//! ```json
//! {
//!   "timestamp": 1700000000,
//!   "sender": "",
//!   "recipient": "bob",
//!   "amount": 10,
//!   "signature": "3af1…",
//!   "publicKey": "9c44…"
//! }
//! ```
//!
//! ## Signed Payload
//!
//! Only `timestamp`, `sender`, `recipient`, and `amount` are covered by the
//! signature. [`Transaction::signing_payload`] produces the canonical JSON of
//! exactly those fields; `signature` and `publicKey` are never part of it.

use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};

/// A signed transfer of `amount` units to `recipient`.
///
/// The `sender` field is carried and signed but currently always empty; no
/// account model exists that could populate it.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Creation time, unix seconds.
    pub timestamp: i64,
    /// Originating account. Always empty.
    pub sender: String,
    /// Receiving account. Must be non-empty to pass validation.
    pub recipient: String,
    /// Transferred amount. Signed so that a negative value parses and is
    /// rejected by the pipeline rather than by the codec.
    pub amount: i64,
    /// ECDSA signature over the hash of the signing payload: r || s, each
    /// 32 bytes zero-padded big-endian.
    #[serde_as(as = "Hex")]
    pub signature: Vec<u8>,
    /// Uncompressed P-256 public point: X || Y, 32 bytes each, no SEC1 tag.
    #[serde_as(as = "Hex")]
    pub public_key: Vec<u8>,
}

/// The subset of fields covered by the signature, in wire order.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SigningPayload<'a> {
    timestamp: i64,
    sender: &'a str,
    recipient: &'a str,
    amount: i64,
}

impl Transaction {
    /// Builds a transaction with no signature or public key attached yet.
    pub fn unsigned(timestamp: i64, recipient: impl Into<String>, amount: i64) -> Self {
        Self {
            timestamp,
            sender: String::new(),
            recipient: recipient.into(),
            amount,
            signature: Vec::new(),
            public_key: Vec::new(),
        }
    }

    /// Canonical JSON of the unsigned fields. This is the exact byte string
    /// that gets hashed and signed.
    pub fn signing_payload(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&SigningPayload {
            timestamp: self.timestamp,
            sender: &self.sender,
            recipient: &self.recipient,
            amount: self.amount,
        })
    }
}
