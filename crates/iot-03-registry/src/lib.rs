//! # IoT Registry (IOT-03)
//!
//! Ledger-side registry of signed identities and the things they own.
//!
//! ## Operations
//!
//! | Function | Effect |
//! |----------|--------|
//! | `init(seed)` | Store `CounterSeed = SHA-256(seed)` |
//! | `invoke("registerOwner", payload)` | Bind a name to a secp256k1 public key |
//! | `invoke("registerThing", payload)` | Register a thing, its nonce and aliases |
//! | `query("owner" \| "thing" \| "alias", arg)` | JSON view of a record |
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | 1 | Unique Names | An identity name is registered at most once |
//! | 2 | Unique Nonces | A thing nonce is used at most once |
//! | 3 | Owner Trust Anchor | Things verify against the owner's stored key |
//! | 4 | Alias Separation | An alias never equals an identity name |
//! | 5 | Atomic Admission | All writes of a request commit together or not at all |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - records, keyspace, request decoding, admission engine
//! - `service/` - `RegistryService` facade and `QueryService`
//! - `config` - admission limits and alias policy
//! - `telemetry` - optional `tracing` subscriber setup
//!
//! ## Usage
//!
//! ```ignore
//! use iot_02_state_store::InMemoryKVStore;
//! use iot_03_registry::RegistryService;
//!
//! let mut registry = RegistryService::new(InMemoryKVStore::new());
//! registry.init(&["seed"])?;
//! registry.invoke("registerOwner", &[payload_hex])?;
//! let owner_json = registry.query("owner", &["alice"])?;
//! ```

pub mod config;
pub mod domain;
pub mod service;
pub mod telemetry;


pub use config::{AliasPolicy, ConfigError, RegistryConfig};
pub use domain::admission::{AdmissionEngine, AdmissionReceipt};
pub use domain::entities::{
    Alias, AliasView, Identity, IdentityView, Nonce, Thing, ThingView, NONCE_USED_MARKER,
};
pub use domain::errors::{CollisionKind, DecodingError, ErrorKind, RegistryError, ValidationError};
pub use domain::keys::StateKey;
pub use domain::message::{identity_message, thing_message};
pub use domain::request::{
    Operation, RegisterIdentityRequest, RegisterThingRequest, RegistryRequest,
};
pub use service::query::{QueryFunction, QueryService};
pub use service::registry::RegistryService;
pub use telemetry::{init_tracing, LogConfig, TelemetryError};
