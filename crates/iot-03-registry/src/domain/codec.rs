//! Record serialization with bincode.

use super::errors::RegistryError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encode a record for storage.
pub fn encode_record<T: Serialize>(what: &'static str, record: &T) -> Result<Vec<u8>, RegistryError> {
    bincode::serialize(record).map_err(|e| RegistryError::Encoding {
        what,
        reason: e.to_string(),
    })
}

/// Decode a record read from `key`.
pub fn decode_record<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T, RegistryError> {
    bincode::deserialize(bytes).map_err(|e| RegistryError::CorruptRecord {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
