//! # State Transaction
//!
//! Read-your-writes overlay over a `KeyValueStore`.
//!
//! Writes are staged in memory and reach the store only through `commit`,
//! as one `atomic_batch_write`. Reads consult staged writes first, so a check
//! later in a transaction observes what the same transaction already claimed.
//! Dropping the transaction without committing discards everything.

use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore};
use std::collections::HashMap;
use tracing::debug;

/// Pending write-set bound to a store for the duration of one admission.
pub struct StateTransaction<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
    /// Staged operations in insertion order.
    staged: Vec<BatchOperation>,
    /// Key -> position in `staged`.
    index: HashMap<Vec<u8>, usize>,
}

impl<'a, S: KeyValueStore + ?Sized> StateTransaction<'a, S> {
    /// Begin a transaction against `store`.
    pub fn begin(store: &'a mut S) -> Self {
        Self {
            store,
            staged: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Read a key, preferring a value staged by this transaction.
    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        if let Some(&pos) = self.index.get(key) {
            let BatchOperation::Put { value, .. } = &self.staged[pos];
            return Ok(Some(value.clone()));
        }
        self.store.get(key)
    }

    /// Check existence, including keys staged by this transaction.
    pub fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        if self.index.contains_key(key) {
            return Ok(true);
        }
        self.store.exists(key)
    }

    /// True if this transaction (not the store) holds a write for `key`.
    pub fn is_staged(&self, key: &[u8]) -> bool {
        self.index.contains_key(key)
    }

    /// Stage a write. A second put to the same key replaces the first.
    pub fn put(&mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => self.staged[pos] = BatchOperation::put(key, value),
            None => {
                self.index.insert(key.clone(), self.staged.len());
                self.staged.push(BatchOperation::put(key, value));
            }
        }
    }

    /// Number of staged writes.
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    /// Staged keys in insertion order.
    pub fn staged_keys(&self) -> impl Iterator<Item = &[u8]> {
        self.staged.iter().map(BatchOperation::key)
    }

    /// Commit every staged write as a single atomic batch.
    ///
    /// Returns the number of operations written. An empty transaction
    /// commits nothing and does not touch the store.
    pub fn commit(self) -> Result<usize, KVStoreError> {
        let count = self.staged.len();
        if count == 0 {
            return Ok(0);
        }
        self.store.atomic_batch_write(self.staged)?;
        debug!(operations = count, "State transaction committed");
        Ok(count)
    }

    /// Discard every staged write.
    pub fn rollback(self) {
        debug!(operations = self.staged.len(), "State transaction rolled back");
    }
}
