//! # Registry State Store (IOT-02)
//!
//! The ledger state the registry reads and writes. The real store belongs to
//! the hosting ledger runtime; this crate defines the port it must implement
//! and the transaction overlay admission runs against.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Atomic Writes | A transaction's write-set commits entirely or not at all |
//! | 2 | Read-Your-Writes | Reads inside a transaction see its own staged writes |
//! | 3 | No Partial Commit | A failed or dropped transaction writes nothing |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - `StateTransaction` overlay and error types
//! - `ports/` - `KeyValueStore` outbound port
//! - `adapters/` - In-memory store and (feature `rocksdb`) RocksDB store

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::memory::InMemoryKVStore;
#[cfg(feature = "rocksdb")]
pub use adapters::rocksdb::{RocksDbConfig, RocksDbStore};
pub use domain::errors::KVStoreError;
pub use domain::transaction::StateTransaction;
pub use ports::outbound::{BatchOperation, KeyValueStore};
