//! Fuzz target for DER signature parsing and verification.
//!
//! Arbitrary key, signature and message bytes must never panic and must
//! always produce the same outcome twice.
//!
//! ## Running
//!
//! ```bash
//! cd crates/iot-01-signature-verification
//! cargo +nightly fuzz run fuzz_der_verify
//! ```

#![no_main]

use iot_01_signature_verification::{EcdsaVerifier, SignatureError, SignatureVerificationApi};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    public_key: Vec<u8>,
    signature: Vec<u8>,
    message: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let verifier = EcdsaVerifier::new();

    let result = verifier.verify(&input.public_key, &input.signature, &input.message);
    let again = verifier.verify(&input.public_key, &input.signature, &input.message);
    assert_eq!(result, again);

    // Random bytes essentially never verify; if they do, both must have parsed
    if result.is_ok() {
        assert!(iot_01_signature_verification::parse_public_key(&input.public_key).is_ok());
        assert!(iot_01_signature_verification::parse_der_signature(&input.signature).is_ok());
    }

    if let Err(SignatureError::SignatureMismatch) = result {
        assert!(iot_01_signature_verification::parse_der_signature(&input.signature).is_ok());
    }
});
