//! # Registry Errors
//!
//! Every rejection is terminal for its transaction and leaves state
//! untouched. The four families map to `ErrorKind`:
//!
//! | Kind | Source |
//! |------|--------|
//! | Validation | keyspace invariants (`ValidationError`) |
//! | Crypto | key/signature parsing or mismatch (`SignatureError`) |
//! | Decoding | function names, arguments, payloads (`DecodingError`) |
//! | Store | host store failures (`KVStoreError`), unreadable records |

use iot_01_signature_verification::SignatureError;
use iot_02_state_store::KVStoreError;
use std::fmt;
use thiserror::Error;

/// What an alias collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// An identity with the alias as its name
    Identity,
    /// An alias already bound to a thing, or repeated in the same request
    Alias,
}

impl fmt::Display for CollisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionKind::Identity => f.write_str("identity"),
            CollisionKind::Alias => f.write_str("alias"),
        }
    }
}

/// Keyspace invariant violations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Identity already registered: {owner_name}")]
    DuplicateIdentity { owner_name: String },

    #[error("Nonce already used: {nonce}")]
    DuplicateNonce { nonce: String },

    #[error("Owner identity not registered: {owner_name}")]
    UnknownOwner { owner_name: String },

    #[error("Alias {alias} collides with an existing {existing}")]
    AliasCollision {
        alias: String,
        existing: CollisionKind,
    },

    #[error("Invalid name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Too many aliases: {count} exceeds limit {max}")]
    TooManyAliases { count: usize, max: usize },
}

/// Malformed function names, arguments or payloads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodingError {
    #[error("Unknown function: {function}")]
    UnknownFunction { function: String },

    #[error("Missing argument: {expected}")]
    MissingArgument { expected: &'static str },

    #[error("Expected {expected} argument(s), got {actual}")]
    UnexpectedArguments { expected: usize, actual: usize },

    #[error("Invalid hex: {reason}")]
    InvalidHex { reason: String },

    #[error("Malformed {operation} payload: {reason}")]
    MalformedPayload {
        operation: &'static str,
        reason: String,
    },

    #[error("Payload of {size} bytes exceeds limit of {max}")]
    PayloadTooLarge { size: usize, max: usize },
}

/// Coarse classification of a `RegistryError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Crypto,
    Decoding,
    Store,
    NotFound,
}

/// Top-level registry error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Signature verification failed: {0}")]
    Crypto(#[from] SignatureError),

    #[error("Decoding failed: {0}")]
    Decoding(#[from] DecodingError),

    #[error("State store failure: {0}")]
    Store(#[from] KVStoreError),

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A stored record could not be decoded.
    #[error("Corrupt record at {key}: {reason}")]
    CorruptRecord { key: String, reason: String },

    #[error("Failed to encode {what}: {reason}")]
    Encoding { what: &'static str, reason: String },
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::Validation(_) => ErrorKind::Validation,
            RegistryError::Crypto(_) => ErrorKind::Crypto,
            RegistryError::Decoding(_) => ErrorKind::Decoding,
            RegistryError::Store(_)
            | RegistryError::CorruptRecord { .. }
            | RegistryError::Encoding { .. } => ErrorKind::Store,
            RegistryError::NotFound { .. } => ErrorKind::NotFound,
        }
    }
}
