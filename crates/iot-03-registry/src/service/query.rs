//! # Query Service
//!
//! Read-only lookups. Queries never write, so repeating one without an
//! intervening admission returns the same result.

use crate::domain::codec::decode_record;
use crate::domain::entities::{Alias, AliasView, Identity, IdentityView, Nonce, Thing, ThingView};
use crate::domain::errors::{DecodingError, RegistryError};
use crate::domain::keys::StateKey;
use iot_02_state_store::KeyValueStore;
use serde::de::DeserializeOwned;
use std::fmt;
use std::str::FromStr;

/// Query functions exposed on the query interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryFunction {
    Owner,
    Thing,
    Alias,
}

impl QueryFunction {
    pub const fn function_name(&self) -> &'static str {
        match self {
            QueryFunction::Owner => "owner",
            QueryFunction::Thing => "thing",
            QueryFunction::Alias => "alias",
        }
    }
}

impl FromStr for QueryFunction {
    type Err = DecodingError;

    fn from_str(function: &str) -> Result<Self, Self::Err> {
        match function {
            "owner" => Ok(QueryFunction::Owner),
            "thing" => Ok(QueryFunction::Thing),
            "alias" => Ok(QueryFunction::Alias),
            other => Err(DecodingError::UnknownFunction {
                function: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for QueryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

/// Lookups over a borrowed store.
pub struct QueryService<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> QueryService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Identity registered under `owner_name`.
    pub fn owner(&self, owner_name: &str) -> Result<IdentityView, RegistryError> {
        let identity: Identity = self.load("identity", StateKey::OwnerIdentity(owner_name))?;
        Ok(identity.into())
    }

    /// Thing registered under a hex nonce (either case).
    pub fn thing(&self, nonce_hex: &str) -> Result<ThingView, RegistryError> {
        let nonce = Nonce::from_hex(nonce_hex)?;
        let thing: Thing = self.load("thing", StateKey::Thing(&nonce))?;
        Ok(ThingView::new(&nonce, thing))
    }

    /// Thing nonce an alias is bound to.
    pub fn alias(&self, alias: &str) -> Result<AliasView, RegistryError> {
        let record: Alias = self.load("alias", StateKey::Alias(alias))?;
        Ok(AliasView {
            alias: alias.to_string(),
            nonce: Nonce::new(record.nonce).to_hex(),
        })
    }

    /// True if a thing has been registered with this nonce.
    pub fn nonce_used(&self, nonce: &Nonce) -> Result<bool, RegistryError> {
        Ok(self.store.exists(&StateKey::NonceUsed(nonce).to_bytes())?)
    }

    /// Seed digest stored by `init`.
    pub fn counter_seed(&self) -> Result<[u8; 32], RegistryError> {
        let key = StateKey::CounterSeed;
        let bytes = self
            .store
            .get(&key.to_bytes())?
            .ok_or_else(|| RegistryError::NotFound {
                entity: "counter seed",
                key: key.to_string(),
            })?;
        bytes
            .as_slice()
            .try_into()
            .map_err(|_| RegistryError::CorruptRecord {
                key: key.to_string(),
                reason: format!("expected 32 bytes, got {}", bytes.len()),
            })
    }

    fn load<T: DeserializeOwned>(
        &self,
        entity: &'static str,
        key: StateKey<'_>,
    ) -> Result<T, RegistryError> {
        let key_string = key.to_string();
        match self.store.get(key_string.as_bytes())? {
            Some(bytes) => decode_record(&key_string, &bytes),
            None => Err(RegistryError::NotFound {
                entity,
                key: key_string,
            }),
        }
    }
}
