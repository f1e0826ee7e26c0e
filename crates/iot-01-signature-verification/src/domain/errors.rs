//! # Signature Errors
//!
//! Error types for signature verification operations.

use thiserror::Error;

/// Errors that can occur during signature verification.
///
/// Parsing failures and a genuine mismatch are separate variants so callers
/// can tell a malformed request from a forged one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The public key is not a valid SEC1-encoded secp256k1 point
    #[error("Invalid public key: {reason}")]
    InvalidPublicKey { reason: String },

    /// The signature is not a valid DER-encoded ECDSA signature
    #[error("Invalid signature encoding: {reason}")]
    InvalidSignatureEncoding { reason: String },

    /// Key and signature parsed, but the signature does not verify
    #[error("Signature does not match message and public key")]
    SignatureMismatch,
}

impl SignatureError {
    /// True when the failure came from parsing rather than verification.
    pub fn is_encoding_error(&self) -> bool {
        !matches!(self, SignatureError::SignatureMismatch)
    }
}
