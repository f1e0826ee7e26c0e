//! # State Keys
//!
//! Logical namespaces of the registry keyspace.
//!
//! | Key | Value |
//! |-----|-------|
//! | `OwnerIdentity:<name>` | bincode `Identity` |
//! | `Alias:<alias>` | bincode `Alias` |
//! | `Thing:<hex nonce>` | bincode `Thing` |
//! | `Nonce:<hex nonce>` | `NONCE_USED_MARKER` |
//! | `CounterSeed` | 32-byte SHA-256 of the init seed |

use super::entities::Nonce;
use std::fmt;

pub const OWNER_IDENTITY_PREFIX: &str = "OwnerIdentity:";
pub const ALIAS_PREFIX: &str = "Alias:";
pub const THING_PREFIX: &str = "Thing:";
pub const NONCE_PREFIX: &str = "Nonce:";
pub const COUNTER_SEED_KEY: &str = "CounterSeed";

/// A key in the registry keyspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKey<'a> {
    OwnerIdentity(&'a str),
    Alias(&'a str),
    Thing(&'a Nonce),
    NonceUsed(&'a Nonce),
    CounterSeed,
}

impl StateKey<'_> {
    /// Byte form handed to the store.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl fmt::Display for StateKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKey::OwnerIdentity(name) => write!(f, "{}{}", OWNER_IDENTITY_PREFIX, name),
            StateKey::Alias(alias) => write!(f, "{}{}", ALIAS_PREFIX, alias),
            StateKey::Thing(nonce) => write!(f, "{}{}", THING_PREFIX, nonce.to_hex()),
            StateKey::NonceUsed(nonce) => write!(f, "{}{}", NONCE_PREFIX, nonce.to_hex()),
            StateKey::CounterSeed => f.write_str(COUNTER_SEED_KEY),
        }
    }
}
