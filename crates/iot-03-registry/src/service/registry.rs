//! # Registry Service
//!
//! The host-facing entry points: `init`, `invoke` and `query`, taking a
//! function name and string arguments the way a ledger runtime passes them.
//!
//! The service owns its store. Callers that serialize submissions (the
//! ledger runtime) get one admission at a time through `&mut self`.

use crate::config::{ConfigError, RegistryConfig};
use crate::domain::admission::{AdmissionEngine, AdmissionReceipt};
use crate::domain::errors::{DecodingError, RegistryError};
use crate::domain::keys::StateKey;
use crate::domain::request::{Operation, RegistryRequest};
use crate::service::query::{QueryFunction, QueryService};
use iot_01_signature_verification::{EcdsaVerifier, SignatureVerificationApi};
use iot_02_state_store::{BatchOperation, KeyValueStore};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

/// Registry facade over a state store.
pub struct RegistryService<S: KeyValueStore, V: SignatureVerificationApi = EcdsaVerifier> {
    store: S,
    engine: AdmissionEngine<V>,
}

impl<S: KeyValueStore> RegistryService<S> {
    /// Service with the secp256k1 verifier and default configuration.
    pub fn new(store: S) -> Self {
        Self {
            store,
            engine: AdmissionEngine::new(EcdsaVerifier::new(), RegistryConfig::default()),
        }
    }

    /// Service with the secp256k1 verifier and a validated configuration.
    pub fn with_config(store: S, config: RegistryConfig) -> Result<Self, ConfigError> {
        Self::with_verifier(store, config, EcdsaVerifier::new())
    }

    /// Service configured from `IOT_*` environment variables.
    pub fn from_env(store: S) -> Result<Self, ConfigError> {
        Self::with_config(store, RegistryConfig::from_env()?)
    }
}

impl<S: KeyValueStore, V: SignatureVerificationApi> RegistryService<S, V> {
    pub fn with_verifier(store: S, config: RegistryConfig, verifier: V) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            alias_policy = %config.alias_policy,
            max_payload_bytes = config.max_payload_bytes,
            "Registry service configured"
        );
        Ok(Self {
            store,
            engine: AdmissionEngine::new(verifier, config),
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        self.engine.config()
    }

    /// Store `CounterSeed = SHA-256(args[0])`.
    ///
    /// Extra arguments are ignored. Re-running overwrites the seed.
    pub fn init<A: AsRef<str>>(&mut self, args: &[A]) -> Result<(), RegistryError> {
        let seed = args
            .first()
            .ok_or(DecodingError::MissingArgument { expected: "seed" })?;

        let key = StateKey::CounterSeed.to_bytes();
        if self.store.exists(&key)? {
            warn!("Init called on an initialized registry, overwriting counter seed");
        }

        let digest: [u8; 32] = Sha256::digest(seed.as_ref().as_bytes()).into();
        self.store
            .atomic_batch_write(vec![BatchOperation::put(key, digest.to_vec())])?;
        info!(seed_digest = %hex::encode(digest), "Registry initialized");
        Ok(())
    }

    /// Run a state-changing function.
    ///
    /// `args` must be exactly one hex-encoded request payload.
    pub fn invoke<A: AsRef<str>>(
        &mut self,
        function: &str,
        args: &[A],
    ) -> Result<AdmissionReceipt, RegistryError> {
        let operation: Operation = function.parse()?;
        let payload_hex = single_argument(args, "payload")?;
        let request =
            RegistryRequest::decode_hex(operation, payload_hex, self.config().max_payload_bytes)?;
        self.submit(&request)
    }

    /// Admit an already-decoded request.
    pub fn submit(&mut self, request: &RegistryRequest) -> Result<AdmissionReceipt, RegistryError> {
        self.engine.admit(&mut self.store, request)
    }

    /// Run a read-only function, returning its result as JSON bytes.
    ///
    /// `args` must be exactly one name or hex nonce.
    pub fn query<A: AsRef<str>>(&self, function: &str, args: &[A]) -> Result<Vec<u8>, RegistryError> {
        let function: QueryFunction = function.parse()?;
        let argument = single_argument(args, function.function_name())?;
        let queries = self.queries();

        match function {
            QueryFunction::Owner => to_json(&queries.owner(argument)?),
            QueryFunction::Thing => to_json(&queries.thing(argument)?),
            QueryFunction::Alias => to_json(&queries.alias(argument)?),
        }
    }

    /// Typed lookups over the current state.
    pub fn queries(&self) -> QueryService<'_, S> {
        QueryService::new(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn single_argument<'a, A: AsRef<str>>(
    args: &'a [A],
    expected: &'static str,
) -> Result<&'a str, DecodingError> {
    match args {
        [only] => Ok(only.as_ref()),
        [] => Err(DecodingError::MissingArgument { expected }),
        _ => Err(DecodingError::UnexpectedArguments {
            expected: 1,
            actual: args.len(),
        }),
    }
}

fn to_json<T: Serialize>(view: &T) -> Result<Vec<u8>, RegistryError> {
    serde_json::to_vec(view).map_err(|e| RegistryError::Encoding {
        what: "query result",
        reason: e.to_string(),
    })
}
