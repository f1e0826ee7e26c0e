use thiserror::Error;

/// Key-value store errors.
///
/// These come from the host store and are passed through unchanged; retrying
/// is the host runtime's decision.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },

    /// Data corruption in the store.
    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },

    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("KV store lock poisoned")]
    LockPoisoned,
}
