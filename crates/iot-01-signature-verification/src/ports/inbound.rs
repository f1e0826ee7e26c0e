//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this crate.

use crate::domain::errors::SignatureError;

/// Signature Verification API.
///
/// Implementations must be thread-safe (`Send + Sync`) and deterministic:
/// the same inputs always produce the same outcome.
pub trait SignatureVerificationApi: Send + Sync {
    /// Verify a DER-encoded `signature` over the SHA-256 digest of `message`
    /// under a SEC1-encoded `public_key`.
    ///
    /// # Errors
    /// * `SignatureError::InvalidPublicKey` - key bytes could not be parsed
    /// * `SignatureError::InvalidSignatureEncoding` - signature bytes could not be parsed
    /// * `SignatureError::SignatureMismatch` - parsed fine, did not verify
    fn verify(
        &self,
        public_key: &[u8],
        signature: &[u8],
        message: &[u8],
    ) -> Result<(), SignatureError>;
}
