use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore};
use std::collections::HashMap;

/// In-memory key-value store.
///
/// A batch is applied to the map in one step under `&mut self`, so it is
/// atomic with respect to every other caller. Failures can be injected to
/// exercise the no-partial-commit paths of the registry.
#[derive(Debug, Default)]
pub struct InMemoryKVStore {
    data: HashMap<Vec<u8>, Vec<u8>>,
    batches_written: u64,
    fail_next_write: Option<String>,
    fail_reads: Option<String>,
}

impl InMemoryKVStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of successful `atomic_batch_write` calls.
    pub fn batches_written(&self) -> u64 {
        self.batches_written
    }

    /// Copy of the full contents, for before/after comparisons.
    pub fn snapshot(&self) -> HashMap<Vec<u8>, Vec<u8>> {
        self.data.clone()
    }

    /// Make the next batch write fail with an I/O error.
    pub fn fail_next_write(&mut self, message: impl Into<String>) {
        self.fail_next_write = Some(message.into());
    }

    /// Make every read fail with an I/O error until cleared.
    pub fn fail_reads(&mut self, message: Option<String>) {
        self.fail_reads = message;
    }
}

impl KeyValueStore for InMemoryKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        if let Some(message) = &self.fail_reads {
            return Err(KVStoreError::IOError {
                message: message.clone(),
            });
        }
        Ok(self.data.get(key).cloned())
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        if let Some(message) = self.fail_next_write.take() {
            return Err(KVStoreError::IOError { message });
        }

        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    self.data.insert(key, value);
                }
            }
        }
        self.batches_written += 1;
        Ok(())
    }
}
