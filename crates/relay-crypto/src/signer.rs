//! # Signer Port
//!
//! Capability trait over the crypto primitives so the pipeline can take a
//! deterministic double in tests instead of the real curve.

use crate::ecdsa::{self, EcdsaKeyPair};
use crate::errors::CryptoError;
use crate::hashing::{self, Digest};

/// Cryptographic capabilities the transaction pipeline depends on.
pub trait Signer: Send + Sync {
    /// Deterministic digest of arbitrary input bytes.
    fn hash(&self, data: &[u8]) -> Digest;

    /// Generate a fresh keypair from a cryptographically secure source.
    ///
    /// # Errors
    /// `KeyGenerationFailed` if the underlying curve operation fails. A
    /// failed result must not be used for signing.
    fn generate_keypair(&self) -> Result<EcdsaKeyPair, CryptoError>;

    /// Sign a digest, producing fixed-width `r || s` bytes.
    ///
    /// # Errors
    /// `SigningFailed` if the signing operation cannot complete. This is
    /// unrecoverable for the transaction being built, not for the process.
    fn sign(&self, keypair: &EcdsaKeyPair, digest: &Digest) -> Result<Vec<u8>, CryptoError>;

    /// Verify a signature over a digest. Never errors: malformed input of
    /// any shape yields `false`.
    fn verify_signature(&self, public_key: &[u8], digest: &Digest, signature: &[u8]) -> bool;
}

/// Production signer: SHA-256 digests and P-256 ECDSA.
#[derive(Debug, Clone, Copy, Default)]
pub struct P256Signer;

impl P256Signer {
    /// Create a new signer.
    pub fn new() -> Self {
        Self
    }
}

impl Signer for P256Signer {
    fn hash(&self, data: &[u8]) -> Digest {
        hashing::sha256(data)
    }

    fn generate_keypair(&self) -> Result<EcdsaKeyPair, CryptoError> {
        EcdsaKeyPair::generate()
    }

    fn sign(&self, keypair: &EcdsaKeyPair, digest: &Digest) -> Result<Vec<u8>, CryptoError> {
        keypair.sign_digest(digest)
    }

    fn verify_signature(&self, public_key: &[u8], digest: &Digest, signature: &[u8]) -> bool {
        ecdsa::verify_signature(public_key, digest, signature)
    }
}
