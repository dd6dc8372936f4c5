//! # Relay Crypto Crate
//!
//! Cryptographic primitives for the Tx-Relay node.
//!
//! - SHA-256 hashing of arbitrary byte strings
//! - P-256 (NIST secp256r1) ECDSA key generation, signing, verification
//!
//! ## Encoding Invariants
//!
//! All byte encodings are fixed-width so that components can be recovered
//! without guessing at boundaries:
//!
//! - Signature: `r || s`, each 32 bytes zero-padded big-endian (64 total)
//! - Public key: uncompressed point `X || Y`, 32 bytes each, no SEC1 tag
//!
//! Verification fails closed: any input that does not match these widths
//! returns `false`, never an error or a panic.

pub mod ecdsa;
pub mod errors;
pub mod hashing;
pub mod signer;

pub use ecdsa::{EcdsaKeyPair, PUBLIC_KEY_LEN, SIGNATURE_LEN};
pub use errors::CryptoError;
pub use hashing::{sha256, Digest};
pub use signer::{P256Signer, Signer};
