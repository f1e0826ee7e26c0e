//! # Domain Entities
//!
//! Core data structures for signature verification.

/// SHA-256 digest of a canonical message.
pub type MessageDigest = [u8; 32];

/// Length of a compressed SEC1 public key.
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;

/// Length of an uncompressed SEC1 public key.
pub const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;

/// SEC1 tag of an uncompressed point.
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// SEC1 hybrid tags: full coordinates plus the parity of y.
pub const HYBRID_EVEN_TAG: u8 = 0x06;
pub const HYBRID_ODD_TAG: u8 = 0x07;

/// Upper bound on a DER-encoded secp256k1 signature
/// (2 + 2 * (2 + 33) bytes).
pub const MAX_DER_SIGNATURE_LEN: usize = 72;
