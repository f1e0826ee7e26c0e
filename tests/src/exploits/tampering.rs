//! # Tampering
//!
//! Single-bit corruption of signatures, keys and signed fields in transit.
//! Every variant must be rejected without touching state.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use iot_03_registry::{ErrorKind, RegistryError};

    fn flip_bit(bytes: &[u8], bit: usize) -> Vec<u8> {
        let mut flipped = bytes.to_vec();
        flipped[bit / 8] ^= 1 << (bit % 8);
        flipped
    }

    #[test]
    fn test_flipped_thing_signature_bits() {
        let alice = Registrant::new("alice");
        let mut registry = registry_with(&alice);
        let before = registry.store().snapshot();
        let request = alice.thing_request(&["fridge1", "fridge2"], "kitchen", &[0x01]);

        for bit in 0..request.signature.len() * 8 {
            let mut tampered = request.clone();
            tampered.signature = flip_bit(&request.signature, bit);

            let result = registry.invoke("registerThing", &[payload(tampered)]);

            let err = result.expect_err("tampered signature accepted");
            assert_eq!(err.kind(), ErrorKind::Crypto, "bit {}", bit);
        }
        assert_eq!(registry.store().snapshot(), before);
    }

    #[test]
    fn test_flipped_identity_key_bits() {
        let alice = Registrant::new("alice");
        let mut registry = registry();
        let request = alice.identity_request("bio-data");

        for bit in 0..request.public_key.len() * 8 {
            let mut tampered = request.clone();
            tampered.public_key = flip_bit(&request.public_key, bit);

            let result = registry.invoke("registerOwner", &[payload(tampered)]);

            let err = result.expect_err("tampered key accepted");
            assert_eq!(err.kind(), ErrorKind::Crypto, "bit {}", bit);
        }
        assert!(registry.store().is_empty());
    }

    #[test]
    fn test_flipped_identity_data_bits() {
        let alice = Registrant::new("alice");
        let mut registry = registry();
        let request = alice.identity_request("bio-data");

        // Low bits only, so the field stays ASCII
        for index in 0..request.data.len() {
            let mut bytes = request.data.clone().into_bytes();
            bytes[index] ^= 0x01;
            let mut tampered = request.clone();
            tampered.data = String::from_utf8(bytes).unwrap();

            let result = registry.invoke("registerOwner", &[payload(tampered)]);

            assert!(
                matches!(result, Err(RegistryError::Crypto(_))),
                "byte {}",
                index
            );
        }
        assert!(registry.store().is_empty());
    }

    #[test]
    fn test_flipped_alias_bits() {
        let alice = Registrant::new("alice");
        let mut registry = registry_with(&alice);
        let before = registry.store().snapshot();
        let request = alice.thing_request(&["fridge1", "fridge2"], "kitchen", &[0x02]);

        for alias_index in 0..request.identities.len() {
            for byte in 0..request.identities[alias_index].len() {
                let mut bytes = request.identities[alias_index].clone().into_bytes();
                bytes[byte] ^= 0x01;
                let mut tampered = request.clone();
                tampered.identities[alias_index] = String::from_utf8(bytes).unwrap();

                let result = registry.invoke("registerThing", &[payload(tampered)]);

                assert!(matches!(result, Err(RegistryError::Crypto(_))));
            }
        }
        assert_eq!(registry.store().snapshot(), before);
    }

    #[test]
    fn test_dropped_alias_rejected() {
        let alice = Registrant::new("alice");
        let mut registry = registry_with(&alice);
        let mut request = alice.thing_request(&["fridge1", "fridge2"], "kitchen", &[0x03]);
        request.identities.pop();

        let result = registry.invoke("registerThing", &[payload(request)]);

        assert!(matches!(result, Err(RegistryError::Crypto(_))));
    }
}
