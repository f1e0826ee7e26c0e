//! # Domain Entities
//!
//! Persisted registry records and their query views.
//!
//! Records are write-once. They are stored with bincode; views are what the
//! query interface renders as JSON, with byte fields hex-encoded.

use super::errors::DecodingError;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Persisted records
// =============================================================================

/// A registered identity: a unique name bound to a secp256k1 public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub owner_name: String,
    /// SEC1-encoded public key, exactly as supplied at registration
    pub public_key: Vec<u8>,
}

/// A registered thing, stored under its nonce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thing {
    pub owner_name: String,
    /// Alias names in request order
    pub aliases: Vec<String>,
    pub data: String,
}

/// Alias binding, stored under the alias name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    /// Nonce of the owning thing
    pub nonce: Vec<u8>,
}

/// Value of a nonce-used marker. Only existence matters; the value is
/// non-empty because some ledgers treat an empty value as absent.
pub const NONCE_USED_MARKER: &[u8] = &[0x01];

// =============================================================================
// Nonce
// =============================================================================

/// Caller-supplied thing nonce.
///
/// The lowercase hex form is the single canonical derivation used for both
/// the nonce-used marker and the thing key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nonce(Vec<u8>);

impl Nonce {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Parse a hex nonce (either case).
    pub fn from_hex(encoded: &str) -> Result<Self, DecodingError> {
        hex::decode(encoded)
            .map(Self)
            .map_err(|e| DecodingError::InvalidHex {
                reason: e.to_string(),
            })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// =============================================================================
// Query views
// =============================================================================

/// Identity as returned by the `owner` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityView {
    pub owner_name: String,
    /// Hex-encoded SEC1 public key
    pub public_key: String,
}

impl From<Identity> for IdentityView {
    fn from(identity: Identity) -> Self {
        Self {
            owner_name: identity.owner_name,
            public_key: hex::encode(identity.public_key),
        }
    }
}

/// Thing as returned by the `thing` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingView {
    /// Canonical hex nonce
    pub nonce: String,
    pub owner_name: String,
    pub aliases: Vec<String>,
    pub data: String,
}

impl ThingView {
    pub fn new(nonce: &Nonce, thing: Thing) -> Self {
        Self {
            nonce: nonce.to_hex(),
            owner_name: thing.owner_name,
            aliases: thing.aliases,
            data: thing.data,
        }
    }
}

/// Alias as returned by the `alias` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasView {
    pub alias: String,
    /// Canonical hex nonce of the owning thing
    pub nonce: String,
}
