//! Domain layer: records, keyspace, request decoding and admission rules.

pub mod admission;
pub mod codec;
pub mod entities;
pub mod errors;
pub mod keys;
pub mod message;
pub mod request;
