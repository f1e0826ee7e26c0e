//! # Outbound Ports (Driven Ports)
//!
//! The interface the hosting ledger runtime implements for the registry.
//!
//! Production: the ledger's transactional state, or `RocksDbStore`
//! Testing: `InMemoryKVStore`

use crate::domain::errors::KVStoreError;

/// Abstract interface for the byte-keyed ledger state.
///
/// The registry never deletes or updates records, so the port exposes reads
/// and a single atomic batch write only.
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(self.get(key)?.is_some())
    }

    /// Execute an atomic batch write.
    ///
    /// ## Atomicity Guarantee
    ///
    /// Either ALL operations in the batch are applied, or NONE are.
    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError>;
}

/// Batch operation for atomic writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOperation {
    /// Put a key-value pair.
    Put { key: Vec<u8>, value: Vec<u8> },
}

impl BatchOperation {
    /// Create a Put operation.
    pub fn put(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Key targeted by this operation.
    pub fn key(&self) -> &[u8] {
        match self {
            BatchOperation::Put { key, .. } => key,
        }
    }
}
