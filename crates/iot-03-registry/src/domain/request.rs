//! # Request Decoding
//!
//! Turns an operation tag and an opaque payload into one typed request.
//!
//! Payloads are bincode-encoded request records. The host passes them to
//! `invoke` as a single hex string argument.

use super::errors::{DecodingError, RegistryError};
use super::message::{identity_message, thing_message};
use bincode::Options;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Operation
// =============================================================================

/// Registry state-changing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "registerOwner")]
    RegisterIdentity,
    #[serde(rename = "registerThing")]
    RegisterThing,
}

impl Operation {
    /// Function name used on the invoke interface.
    pub const fn function_name(&self) -> &'static str {
        match self {
            Operation::RegisterIdentity => "registerOwner",
            Operation::RegisterThing => "registerThing",
        }
    }
}

impl FromStr for Operation {
    type Err = DecodingError;

    fn from_str(function: &str) -> Result<Self, Self::Err> {
        match function {
            "registerOwner" => Ok(Operation::RegisterIdentity),
            "registerThing" => Ok(Operation::RegisterThing),
            other => Err(DecodingError::UnknownFunction {
                function: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

// =============================================================================
// Request records
// =============================================================================

/// Payload of `registerOwner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterIdentityRequest {
    pub owner_name: String,
    pub data: String,
    /// SEC1-encoded public key being registered
    pub public_key: Vec<u8>,
    /// DER signature by `public_key` over `owner_name ":" data`
    pub signature: Vec<u8>,
}

impl RegisterIdentityRequest {
    pub fn canonical_message(&self) -> String {
        identity_message(&self.owner_name, &self.data)
    }
}

/// Payload of `registerThing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterThingRequest {
    pub owner_name: String,
    /// Alias names to bind to the thing, in signing order
    pub identities: Vec<String>,
    pub data: String,
    pub nonce: Vec<u8>,
    /// DER signature by the owner's registered key over
    /// `owner_name (":" alias)*`
    pub signature: Vec<u8>,
}

impl RegisterThingRequest {
    pub fn canonical_message(&self) -> String {
        thing_message(&self.owner_name, &self.identities)
    }
}

/// A decoded registry request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryRequest {
    RegisterIdentity(RegisterIdentityRequest),
    RegisterThing(RegisterThingRequest),
}

impl RegistryRequest {
    pub fn operation(&self) -> Operation {
        match self {
            RegistryRequest::RegisterIdentity(_) => Operation::RegisterIdentity,
            RegistryRequest::RegisterThing(_) => Operation::RegisterThing,
        }
    }

    /// Decode a bincode payload for `operation`.
    ///
    /// Payloads longer than `max_bytes` are rejected before decoding, and
    /// the same limit bounds every length prefix inside the payload.
    /// Trailing bytes are rejected.
    pub fn decode(
        operation: Operation,
        payload: &[u8],
        max_bytes: usize,
    ) -> Result<Self, DecodingError> {
        if payload.len() > max_bytes {
            return Err(DecodingError::PayloadTooLarge {
                size: payload.len(),
                max: max_bytes,
            });
        }

        let options = wire_options().with_limit(max_bytes as u64);
        let malformed = |e: bincode::Error| DecodingError::MalformedPayload {
            operation: operation.function_name(),
            reason: e.to_string(),
        };

        match operation {
            Operation::RegisterIdentity => options
                .deserialize::<RegisterIdentityRequest>(payload)
                .map(RegistryRequest::RegisterIdentity)
                .map_err(malformed),
            Operation::RegisterThing => options
                .deserialize::<RegisterThingRequest>(payload)
                .map(RegistryRequest::RegisterThing)
                .map_err(malformed),
        }
    }

    /// Decode a hex-encoded payload, as passed on the invoke interface.
    pub fn decode_hex(
        operation: Operation,
        payload_hex: &str,
        max_bytes: usize,
    ) -> Result<Self, DecodingError> {
        // Two hex characters per byte; reject before allocating.
        if payload_hex.len() / 2 > max_bytes {
            return Err(DecodingError::PayloadTooLarge {
                size: payload_hex.len() / 2,
                max: max_bytes,
            });
        }
        let payload = hex::decode(payload_hex).map_err(|e| DecodingError::InvalidHex {
            reason: e.to_string(),
        })?;
        Self::decode(operation, &payload, max_bytes)
    }

    /// Encode the request payload (without the operation tag).
    pub fn encode(&self) -> Result<Vec<u8>, RegistryError> {
        let encoded = match self {
            RegistryRequest::RegisterIdentity(request) => wire_options().serialize(request),
            RegistryRequest::RegisterThing(request) => wire_options().serialize(request),
        };
        encoded.map_err(|e| RegistryError::Encoding {
            what: "request payload",
            reason: e.to_string(),
        })
    }

    /// Hex form of `encode`, ready to pass as the invoke argument.
    pub fn encode_hex(&self) -> Result<String, RegistryError> {
        self.encode().map(hex::encode)
    }
}

impl From<RegisterIdentityRequest> for RegistryRequest {
    fn from(request: RegisterIdentityRequest) -> Self {
        RegistryRequest::RegisterIdentity(request)
    }
}

impl From<RegisterThingRequest> for RegistryRequest {
    fn from(request: RegisterThingRequest) -> Self {
        RegistryRequest::RegisterThing(request)
    }
}

/// Shared bincode configuration for request payloads.
fn wire_options() -> impl Options + Copy {
    bincode::DefaultOptions::new()
}
