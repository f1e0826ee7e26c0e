//! # Admission Engine
//!
//! Decides whether a decoded request may change registry state and computes
//! its write-set.
//!
//! ## Procedure
//!
//! Every check runs against a `StateTransaction` overlay. Nothing reaches the
//! store until all checks pass, and then everything is written in one
//! `atomic_batch_write`. Any error drops the overlay, so a rejected request
//! writes nothing.
//!
//! RegisterThing stages each alias as soon as it passes, which is how a
//! repeat later in the same request is detected.

use super::codec::{decode_record, encode_record};
use super::entities::{Alias, Identity, Nonce, Thing, NONCE_USED_MARKER};
use super::errors::{CollisionKind, RegistryError, ValidationError};
use super::keys::StateKey;
use super::request::{
    Operation, RegisterIdentityRequest, RegisterThingRequest, RegistryRequest,
};
use crate::config::{AliasPolicy, RegistryConfig};
use iot_01_signature_verification::SignatureVerificationApi;
use iot_02_state_store::{KeyValueStore, StateTransaction};
use tracing::{debug, info, warn};

/// Outcome of a successful admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionReceipt {
    pub operation: Operation,
    /// Keys committed, in write order
    pub keys_written: Vec<String>,
}

/// Validates requests and commits their write-sets.
#[derive(Debug, Clone)]
pub struct AdmissionEngine<V> {
    verifier: V,
    config: RegistryConfig,
}

impl<V: SignatureVerificationApi> AdmissionEngine<V> {
    pub fn new(verifier: V, config: RegistryConfig) -> Self {
        Self { verifier, config }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Admit any registry request.
    pub fn admit<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        request: &RegistryRequest,
    ) -> Result<AdmissionReceipt, RegistryError> {
        match request {
            RegistryRequest::RegisterIdentity(request) => self.register_identity(store, request),
            RegistryRequest::RegisterThing(request) => self.register_thing(store, request),
        }
    }

    /// Bind a new identity name to the public key that signed the request.
    pub fn register_identity<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        request: &RegisterIdentityRequest,
    ) -> Result<AdmissionReceipt, RegistryError> {
        let result = self.stage_identity(StateTransaction::begin(store), request);
        match &result {
            Ok(receipt) => info!(
                owner = %request.owner_name,
                writes = receipt.keys_written.len(),
                "Identity registered"
            ),
            Err(e) => warn!(owner = %request.owner_name, error = %e, "RegisterIdentity rejected"),
        }
        result
    }

    /// Register a thing on behalf of an existing identity.
    pub fn register_thing<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        request: &RegisterThingRequest,
    ) -> Result<AdmissionReceipt, RegistryError> {
        let nonce = Nonce::new(request.nonce.clone());
        let result = self.stage_thing(StateTransaction::begin(store), request, &nonce);
        match &result {
            Ok(_) => info!(
                owner = %request.owner_name,
                nonce = %nonce,
                aliases = request.identities.len(),
                "Thing registered"
            ),
            Err(e) => warn!(
                owner = %request.owner_name,
                nonce = %nonce,
                error = %e,
                "RegisterThing rejected"
            ),
        }
        result
    }

    fn stage_identity<S: KeyValueStore + ?Sized>(
        &self,
        mut tx: StateTransaction<'_, S>,
        request: &RegisterIdentityRequest,
    ) -> Result<AdmissionReceipt, RegistryError> {
        self.validate_name(&request.owner_name)?;

        let identity_key = StateKey::OwnerIdentity(&request.owner_name);
        if tx.exists(&identity_key.to_bytes())? {
            return Err(ValidationError::DuplicateIdentity {
                owner_name: request.owner_name.clone(),
            }
            .into());
        }

        // The key being registered must have signed its own registration.
        self.verifier.verify(
            &request.public_key,
            &request.signature,
            request.canonical_message().as_bytes(),
        )?;

        let record = encode_record(
            "identity",
            &Identity {
                owner_name: request.owner_name.clone(),
                public_key: request.public_key.clone(),
            },
        )?;
        tx.put(identity_key.to_bytes(), record);

        commit(tx, Operation::RegisterIdentity)
    }

    fn stage_thing<S: KeyValueStore + ?Sized>(
        &self,
        mut tx: StateTransaction<'_, S>,
        request: &RegisterThingRequest,
        nonce: &Nonce,
    ) -> Result<AdmissionReceipt, RegistryError> {
        self.validate_name(&request.owner_name)?;
        if let Some(max) = self.config.max_aliases {
            if request.identities.len() > max {
                return Err(ValidationError::TooManyAliases {
                    count: request.identities.len(),
                    max,
                }
                .into());
            }
        }
        for alias in &request.identities {
            self.validate_name(alias)?;
        }

        let marker_key = StateKey::NonceUsed(nonce).to_bytes();
        if tx.exists(&marker_key)? {
            return Err(ValidationError::DuplicateNonce {
                nonce: nonce.to_hex(),
            }
            .into());
        }

        let owner_key = StateKey::OwnerIdentity(&request.owner_name);
        let owner = match tx.get(&owner_key.to_bytes())? {
            Some(bytes) => decode_record::<Identity>(&owner_key.to_string(), &bytes)?,
            None => {
                return Err(ValidationError::UnknownOwner {
                    owner_name: request.owner_name.clone(),
                }
                .into())
            }
        };

        let alias_record = encode_record(
            "alias",
            &Alias {
                nonce: nonce.as_bytes().to_vec(),
            },
        )?;
        for alias in &request.identities {
            self.check_alias(&tx, alias)?;
            tx.put(StateKey::Alias(alias).to_bytes(), alias_record.clone());
        }

        // Only the owner's registered key is trusted here.
        self.verifier.verify(
            &owner.public_key,
            &request.signature,
            request.canonical_message().as_bytes(),
        )?;

        let thing_record = encode_record(
            "thing",
            &Thing {
                owner_name: request.owner_name.clone(),
                aliases: request.identities.clone(),
                data: request.data.clone(),
            },
        )?;
        tx.put(marker_key, NONCE_USED_MARKER.to_vec());
        tx.put(StateKey::Thing(nonce).to_bytes(), thing_record);

        commit(tx, Operation::RegisterThing)
    }

    fn check_alias<S: KeyValueStore + ?Sized>(
        &self,
        tx: &StateTransaction<'_, S>,
        alias: &str,
    ) -> Result<(), RegistryError> {
        let collision = |existing| {
            RegistryError::from(ValidationError::AliasCollision {
                alias: alias.to_string(),
                existing,
            })
        };

        if tx.exists(&StateKey::OwnerIdentity(alias).to_bytes())? {
            return Err(collision(CollisionKind::Identity));
        }

        let alias_key = StateKey::Alias(alias).to_bytes();
        let claimed = match self.config.alias_policy {
            AliasPolicy::Exclusive => tx.exists(&alias_key)?,
            AliasPolicy::IdentityOnly => tx.is_staged(&alias_key),
        };
        if claimed {
            return Err(collision(CollisionKind::Alias));
        }
        Ok(())
    }

    /// Names of any length are accepted unless `max_name_len` is set.
    fn validate_name(&self, name: &str) -> Result<(), ValidationError> {
        match self.config.max_name_len {
            Some(max) if name.len() > max => Err(ValidationError::InvalidName {
                name: name.to_string(),
                reason: format!("{} bytes exceeds limit of {}", name.len(), max),
            }),
            _ => Ok(()),
        }
    }
}

fn commit<S: KeyValueStore + ?Sized>(
    tx: StateTransaction<'_, S>,
    operation: Operation,
) -> Result<AdmissionReceipt, RegistryError> {
    let keys_written: Vec<String> = tx
        .staged_keys()
        .map(|key| String::from_utf8_lossy(key).into_owned())
        .collect();
    tx.commit()?;
    debug!(%operation, keys = ?keys_written, "Write-set committed");
    Ok(AdmissionReceipt {
        operation,
        keys_written,
    })
}

// =============================================================================
// UNIT TESTS
// =============================================================================
