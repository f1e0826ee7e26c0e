//! # Registration Flows
//!
//! Init, identity registration, thing registration and lookups, exercised
//! the way a ledger host drives them: function name plus string arguments.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use iot_03_registry::{
        ErrorKind, Operation, RegistryError, ValidationError,
    };
    use sha2::{Digest, Sha256};

    // =============================================================================
    // SCENARIO A: INIT AND IDENTITY
    // =============================================================================

    #[test]
    fn test_scenario_a_identity_registration() {
        let alice = Registrant::new("alice");
        let mut registry = registry();

        registry.init(&["genesis-seed"]).unwrap();
        let receipt = registry
            .invoke("registerOwner", &[payload(alice.identity_request("bio-data"))])
            .unwrap();

        assert_eq!(receipt.operation, Operation::RegisterIdentity);
        let owner = json(&registry.query("owner", &["alice"]).unwrap());
        assert_eq!(owner["ownerName"], "alice");
        assert_eq!(owner["publicKey"], hex::encode(alice.public_key()));

        let seed: [u8; 32] = Sha256::digest(b"genesis-seed").into();
        assert_eq!(registry.queries().counter_seed().unwrap(), seed);
    }

    #[test]
    fn test_identity_with_uncompressed_key() {
        let alice = Registrant::new("alice");
        let mut request = alice.identity_request("bio-data");
        request.public_key = alice.public_key_uncompressed();
        let mut registry = registry();

        registry.invoke("registerOwner", &[payload(request)]).unwrap();

        let owner = json(&registry.query("owner", &["alice"]).unwrap());
        assert_eq!(owner["publicKey"], hex::encode(alice.public_key_uncompressed()));
    }

    #[test]
    fn test_identity_with_hybrid_key_signs_things() {
        let alice = Registrant::new("alice");
        let mut hybrid = alice.public_key_uncompressed();
        hybrid[0] = 0x06 | (hybrid[64] & 1);
        let mut request = alice.identity_request("bio-data");
        request.public_key = hybrid.clone();
        let mut registry = registry();

        registry.invoke("registerOwner", &[payload(request)]).unwrap();
        registry
            .invoke("registerThing", &[payload(alice.thing_request(&["fridge"], "d", &[0x01]))])
            .unwrap();

        let owner = json(&registry.query("owner", &["alice"]).unwrap());
        assert_eq!(owner["publicKey"], hex::encode(hybrid));
    }

    #[test]
    fn test_identity_registers_once() {
        let alice = Registrant::new("alice");
        let mut registry = registry_with(&alice);
        let imposter = Registrant::new("alice");

        let result = registry.invoke("registerOwner", &[payload(imposter.identity_request("x"))]);

        assert_eq!(
            result,
            Err(ValidationError::DuplicateIdentity {
                owner_name: "alice".to_string()
            }
            .into())
        );
        let owner = json(&registry.query("owner", &["alice"]).unwrap());
        assert_eq!(owner["publicKey"], hex::encode(alice.public_key()));
    }

    // =============================================================================
    // SCENARIO B: THINGS AND ALIASES
    // =============================================================================

    #[test]
    fn test_scenario_b_thing_registration() {
        let alice = Registrant::new("alice");
        let mut registry = registry_with(&alice);
        let nonce = [0x4E, 0x01];

        let receipt = registry
            .invoke(
                "registerThing",
                &[payload(alice.thing_request(&["fridge1", "fridge2"], "kitchen", &nonce))],
            )
            .unwrap();
        assert_eq!(receipt.operation, Operation::RegisterThing);
        assert_eq!(
            receipt.keys_written,
            vec!["Alias:fridge1", "Alias:fridge2", "Nonce:4e01", "Thing:4e01"]
        );

        for alias in ["fridge1", "fridge2"] {
            let view = json(&registry.query("alias", &[alias]).unwrap());
            assert_eq!(view["nonce"], "4e01");
        }
        let thing = json(&registry.query("thing", &["4e01"]).unwrap());
        assert_eq!(thing["ownerName"], "alice");
        assert_eq!(thing["aliases"], serde_json::json!(["fridge1", "fridge2"]));
        assert_eq!(thing["data"], "kitchen");

        // Same nonce, different aliases
        let replay = registry.invoke(
            "registerThing",
            &[payload(alice.thing_request(&["oven"], "kitchen", &nonce))],
        );
        assert_eq!(
            replay,
            Err(ValidationError::DuplicateNonce {
                nonce: "4e01".to_string()
            }
            .into())
        );
        assert_eq!(
            registry.query("alias", &["oven"]).unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_thing_for_unknown_owner() {
        let bob = Registrant::new("bob");
        let mut registry = registry();

        let result = registry.invoke(
            "registerThing",
            &[payload(bob.thing_request(&["lamp"], "hall", &[0x01]))],
        );

        assert_eq!(
            result,
            Err(ValidationError::UnknownOwner {
                owner_name: "bob".to_string()
            }
            .into())
        );
        assert!(registry.store().is_empty());
    }

    #[test]
    fn test_several_owners_share_registry() {
        let alice = Registrant::new("alice");
        let bob = Registrant::new("bob");
        let mut registry = registry_with(&alice);
        registry
            .invoke("registerOwner", &[payload(bob.identity_request("bob-data"))])
            .unwrap();

        registry
            .invoke("registerThing", &[payload(alice.thing_request(&["a-lamp"], "", &[0x0A]))])
            .unwrap();
        registry
            .invoke("registerThing", &[payload(bob.thing_request(&["b-lamp"], "", &[0x0B]))])
            .unwrap();

        let a = json(&registry.query("thing", &["0a"]).unwrap());
        let b = json(&registry.query("thing", &["0b"]).unwrap());
        assert_eq!(a["ownerName"], "alice");
        assert_eq!(b["ownerName"], "bob");
    }

    #[test]
    fn test_identity_name_taken_by_alias_is_still_registrable() {
        let alice = Registrant::new("alice");
        let mut registry = registry_with(&alice);
        registry
            .invoke("registerThing", &[payload(alice.thing_request(&["carol"], "", &[0x01]))])
            .unwrap();

        let carol = Registrant::new("carol");
        let result = registry.invoke("registerOwner", &[payload(carol.identity_request("x"))]);

        assert!(result.is_ok());
    }

    // =============================================================================
    // QUERY PURITY
    // =============================================================================

    #[test]
    fn test_repeated_queries_are_identical() {
        let alice = Registrant::new("alice");
        let mut registry = registry_with(&alice);
        registry
            .invoke("registerThing", &[payload(alice.thing_request(&["fridge"], "k", &[0xFF]))])
            .unwrap();
        let before = registry.store().snapshot();

        let first = (
            registry.query("owner", &["alice"]).unwrap(),
            registry.query("thing", &["ff"]).unwrap(),
            registry.query("alias", &["fridge"]).unwrap(),
        );
        let second = (
            registry.query("owner", &["alice"]).unwrap(),
            registry.query("thing", &["FF"]).unwrap(),
            registry.query("alias", &["fridge"]).unwrap(),
        );

        assert_eq!(first, second);
        assert_eq!(registry.store().snapshot(), before);
    }

    #[test]
    fn test_decoded_submission_matches_invoke() {
        let alice = Registrant::new("alice");
        let mut by_invoke = registry();
        let mut by_submit = registry();
        let request = alice.identity_request("bio-data");

        let via_invoke = by_invoke
            .invoke("registerOwner", &[payload(request.clone())])
            .unwrap();
        let via_submit = by_submit.submit(&request.into()).unwrap();

        assert_eq!(via_invoke, via_submit);
        assert_eq!(by_invoke.store().snapshot(), by_submit.store().snapshot());
    }

    #[test]
    fn test_error_kinds_at_the_boundary() {
        let mut registry = registry();

        let decoding = registry.invoke("registerOwner", &["not hex"]).unwrap_err();
        let not_found = registry.query("owner", &["ghost"]).unwrap_err();

        assert_eq!(decoding.kind(), ErrorKind::Decoding);
        assert_eq!(not_found.kind(), ErrorKind::NotFound);
        assert!(matches!(not_found, RegistryError::NotFound { .. }));
    }
}
