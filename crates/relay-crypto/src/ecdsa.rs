//! # ECDSA Signatures (P-256)
//!
//! Key generation, signing, and verification on the NIST P-256 curve.
//!
//! ## Encoding
//!
//! - Signatures are `r || s` with each scalar zero-padded big-endian to
//!   32 bytes (64 bytes total). Variable-width big-integer encodings are
//!   rejected: the halving point must be unambiguous.
//! - Public keys are the uncompressed point `X || Y` (64 bytes), without
//!   the SEC1 `0x04` tag.
//!
//! ## Verification Contract
//!
//! [`verify_signature`] never fails open and never panics: malformed
//! lengths, off-curve points, and non-canonical scalars all return `false`.

use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};

use crate::errors::CryptoError;
use crate::hashing::Digest;

/// Fixed width of an `r || s` signature in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// Fixed width of an `X || Y` public key in bytes.
pub const PUBLIC_KEY_LEN: usize = 64;

/// P-256 ECDSA keypair.
///
/// Ephemeral: the pipeline generates one per signing request and drops it
/// once the signature is attached. Keys are never persisted or reused.
pub struct EcdsaKeyPair {
    signing_key: SigningKey,
}

impl EcdsaKeyPair {
    /// Generate a random keypair from a cryptographically secure source.
    pub fn generate() -> Result<Self, CryptoError> {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Ok(Self { signing_key })
    }

    /// Create from secret scalar bytes (32 bytes). Used for deterministic
    /// fixtures in tests.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// The public key as `X || Y` (64 bytes, no SEC1 tag).
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        let point = self.signing_key.verifying_key().to_encoded_point(false);
        // Uncompressed SEC1 encoding is 0x04 || X || Y, 65 bytes.
        let mut bytes = [0u8; PUBLIC_KEY_LEN];
        bytes.copy_from_slice(&point.as_bytes()[1..]);
        bytes
    }

    /// Sign a precomputed digest, producing fixed-width `r || s` bytes.
    pub fn sign_digest(&self, digest: &Digest) -> Result<Vec<u8>, CryptoError> {
        let signature: Signature = self
            .signing_key
            .sign_prehash(digest)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
        Ok(signature.to_bytes().to_vec())
    }
}

/// Verify an `r || s` signature over a digest under an `X || Y` public key.
///
/// Returns `false` for any malformed input: wrong component widths (odd or
/// truncated byte strings included), a point that is not on the curve, or
/// scalars outside the valid range.
pub fn verify_signature(public_key: &[u8], digest: &Digest, signature: &[u8]) -> bool {
    if public_key.len() != PUBLIC_KEY_LEN || signature.len() != SIGNATURE_LEN {
        return false;
    }

    let mut sec1 = [0u8; PUBLIC_KEY_LEN + 1];
    sec1[0] = 0x04;
    sec1[1..].copy_from_slice(public_key);

    let Ok(verifying_key) = VerifyingKey::from_sec1_bytes(&sec1) else {
        return false;
    };
    let Ok(parsed) = Signature::from_slice(signature) else {
        return false;
    };

    verifying_key.verify_prehash(digest, &parsed).is_ok()
}
