//! # Signature Verification (IOT-01)
//!
//! Verifies ECDSA signatures on the secp256k1 curve for the registry.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure cryptographic logic, no I/O
//! - **Ports Layer** (`ports/`): The `SignatureVerificationApi` trait the
//!   admission engine is written against
//!
//! ## Wire Formats
//!
//! - Public keys: SEC1 point encoding (33-byte compressed or 65-byte uncompressed)
//! - Signatures: ASN.1 DER `SEQUENCE { r INTEGER, s INTEGER }`
//! - Digest: SHA-256 of the exact canonical message bytes
//!
//! ## Security Notes
//!
//! - Parse failures and verification failures are reported as distinct errors
//! - High-S signatures are normalized before verification, so acceptance does
//!   not depend on which of the two equivalent S values the signer produced

pub mod domain;
pub mod ports;

// Re-export public API
pub use domain::ecdsa::{
    message_digest, parse_der_signature, parse_public_key, verify_signature, EcdsaVerifier,
};
pub use domain::entities::MessageDigest;
pub use domain::errors::SignatureError;
pub use ports::inbound::SignatureVerificationApi;
