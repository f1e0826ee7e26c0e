//! # ECDSA Verification (secp256k1)
//!
//! Pure domain logic for ECDSA signature verification.
//!
//! ## Procedure
//!
//! 1. Parse the SEC1-encoded public key
//! 2. Parse the DER-encoded signature and normalize S to the lower half
//! 3. SHA-256 the canonical message
//! 4. Verify the signature over the digest
//!
//! Uses the k256 crate for curve arithmetic.

use super::entities::{
    MessageDigest, COMPRESSED_PUBLIC_KEY_LEN, HYBRID_EVEN_TAG, HYBRID_ODD_TAG,
    MAX_DER_SIGNATURE_LEN, UNCOMPRESSED_PUBLIC_KEY_LEN, UNCOMPRESSED_TAG,
};
use super::errors::SignatureError;
use crate::ports::inbound::SignatureVerificationApi;
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{Signature, VerifyingKey};
use sha2::{Digest, Sha256};
use tracing::debug;

// =============================================================================
// ECDSA VERIFIER
// =============================================================================

/// ECDSA signature verifier over secp256k1 with SHA-256 digests.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcdsaVerifier;

impl EcdsaVerifier {
    /// Create a new ECDSA verifier.
    pub fn new() -> Self {
        Self
    }
}

impl SignatureVerificationApi for EcdsaVerifier {
    fn verify(
        &self,
        public_key: &[u8],
        signature: &[u8],
        message: &[u8],
    ) -> Result<(), SignatureError> {
        verify_signature(public_key, signature, message)
    }
}

// =============================================================================
// CORE VERIFICATION FUNCTIONS
// =============================================================================

/// Verify a DER signature over `message` under a SEC1 public key.
///
/// The key is parsed before the signature, so a request carrying both a bad
/// key and a bad signature reports `InvalidPublicKey`.
pub fn verify_signature(
    public_key: &[u8],
    signature: &[u8],
    message: &[u8],
) -> Result<(), SignatureError> {
    let verifying_key = parse_public_key(public_key)?;
    let signature = parse_der_signature(signature)?;
    let digest = message_digest(message);

    verifying_key
        .verify_prehash(&digest, &signature)
        .map_err(|_| {
            debug!(message_len = message.len(), "ECDSA signature mismatch");
            SignatureError::SignatureMismatch
        })
}

/// Parse a SEC1-encoded secp256k1 public key.
///
/// Accepts compressed, uncompressed and hybrid (`0x06`/`0x07`) encodings.
/// A hybrid key's tag must agree with the parity of its y coordinate.
pub fn parse_public_key(bytes: &[u8]) -> Result<VerifyingKey, SignatureError> {
    if bytes.len() != COMPRESSED_PUBLIC_KEY_LEN && bytes.len() != UNCOMPRESSED_PUBLIC_KEY_LEN {
        return Err(SignatureError::InvalidPublicKey {
            reason: format!(
                "expected {} or {} bytes, got {}",
                COMPRESSED_PUBLIC_KEY_LEN,
                UNCOMPRESSED_PUBLIC_KEY_LEN,
                bytes.len()
            ),
        });
    }

    let invalid_point = |_: k256::ecdsa::Error| SignatureError::InvalidPublicKey {
        reason: "not a valid secp256k1 point".to_string(),
    };

    match bytes[0] {
        HYBRID_EVEN_TAG | HYBRID_ODD_TAG if bytes.len() == UNCOMPRESSED_PUBLIC_KEY_LEN => {
            if bytes[0] & 1 != bytes[UNCOMPRESSED_PUBLIC_KEY_LEN - 1] & 1 {
                return Err(SignatureError::InvalidPublicKey {
                    reason: "hybrid key tag does not match y parity".to_string(),
                });
            }
            let mut uncompressed = [0u8; UNCOMPRESSED_PUBLIC_KEY_LEN];
            uncompressed.copy_from_slice(bytes);
            uncompressed[0] = UNCOMPRESSED_TAG;
            VerifyingKey::from_sec1_bytes(&uncompressed).map_err(invalid_point)
        }
        _ => VerifyingKey::from_sec1_bytes(bytes).map_err(invalid_point),
    }
}

/// Parse a DER-encoded ECDSA signature.
///
/// The returned signature always has a low S value. k256 only verifies
/// low-S signatures; normalizing here keeps both encodings of the same
/// signature acceptable.
pub fn parse_der_signature(bytes: &[u8]) -> Result<Signature, SignatureError> {
    if bytes.is_empty() || bytes.len() > MAX_DER_SIGNATURE_LEN {
        return Err(SignatureError::InvalidSignatureEncoding {
            reason: format!(
                "DER signature must be 1..={} bytes, got {}",
                MAX_DER_SIGNATURE_LEN,
                bytes.len()
            ),
        });
    }

    let signature =
        Signature::from_der(bytes).map_err(|e| SignatureError::InvalidSignatureEncoding {
            reason: e.to_string(),
        })?;

    Ok(signature.normalize_s().unwrap_or(signature))
}

/// SHA-256 digest of a message.
pub fn message_digest(message: &[u8]) -> MessageDigest {
    Sha256::digest(message).into()
}

// =============================================================================
// TEST HELPERS
// =============================================================================


// =============================================================================
// UNIT TESTS
// =============================================================================
