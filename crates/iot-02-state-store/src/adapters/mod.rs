//! # Adapters
//!
//! `KeyValueStore` implementations.
//!
//! - `memory`: HashMap-backed store for tests and embedding
//! - `rocksdb`: durable store (feature `rocksdb`)

pub mod memory;
#[cfg(feature = "rocksdb")]
pub mod rocksdb;
