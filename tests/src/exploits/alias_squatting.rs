//! # Alias Squatting
//!
//! Attempts to capture names through aliases: shadowing identities,
//! re-binding another owner's alias, and repeating an alias in one request.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use iot_02_state_store::InMemoryKVStore;
    use iot_03_registry::{
        AliasPolicy, CollisionKind, RegistryConfig, RegistryError, RegistryService,
        ValidationError,
    };

    fn collision(alias: &str, existing: CollisionKind) -> Result<(), RegistryError> {
        Err(ValidationError::AliasCollision {
            alias: alias.to_string(),
            existing,
        }
        .into())
    }

    #[test]
    fn test_alias_shadowing_identity_rejected() {
        let alice = Registrant::new("alice");
        let bob = Registrant::new("bob");
        let mut registry = registry_with(&alice);
        registry
            .invoke("registerOwner", &[payload(bob.identity_request("b"))])
            .unwrap();
        let before = registry.store().snapshot();

        let result = registry
            .invoke("registerThing", &[payload(alice.thing_request(&["lamp", "bob"], "", &[0x01]))])
            .map(|_| ());

        assert_eq!(result, collision("bob", CollisionKind::Identity));
        // The first alias passed its check but was never committed
        assert_eq!(registry.store().snapshot(), before);
    }

    #[test]
    fn test_rebinding_another_owners_alias_rejected() {
        let alice = Registrant::new("alice");
        let mallory = Registrant::new("mallory");
        let mut registry = registry_with(&alice);
        registry
            .invoke("registerOwner", &[payload(mallory.identity_request("m"))])
            .unwrap();
        registry
            .invoke("registerThing", &[payload(alice.thing_request(&["front-door"], "", &[0x01]))])
            .unwrap();

        let result = registry
            .invoke(
                "registerThing",
                &[payload(mallory.thing_request(&["front-door"], "", &[0x66]))],
            )
            .map(|_| ());

        assert_eq!(result, collision("front-door", CollisionKind::Alias));
        let alias = json(&registry.query("alias", &["front-door"]).unwrap());
        assert_eq!(alias["nonce"], "01");
    }

    #[test]
    fn test_identity_only_policy_allows_rebinding_but_not_shadowing() {
        let alice = Registrant::new("alice");
        let config = RegistryConfig::default().with_alias_policy(AliasPolicy::IdentityOnly);
        let mut registry = RegistryService::with_config(InMemoryKVStore::new(), config).unwrap();
        registry
            .invoke("registerOwner", &[payload(alice.identity_request("a"))])
            .unwrap();
        registry
            .invoke("registerThing", &[payload(alice.thing_request(&["door"], "", &[0x01]))])
            .unwrap();

        registry
            .invoke("registerThing", &[payload(alice.thing_request(&["door"], "", &[0x02]))])
            .unwrap();
        let alias = json(&registry.query("alias", &["door"]).unwrap());
        assert_eq!(alias["nonce"], "02");

        let shadow = registry
            .invoke("registerThing", &[payload(alice.thing_request(&["alice"], "", &[0x03]))])
            .map(|_| ());
        assert_eq!(shadow, collision("alice", CollisionKind::Identity));
    }

    #[test]
    fn test_alias_repeated_in_one_request_rejected() {
        let alice = Registrant::new("alice");
        let mut registry = registry_with(&alice);
        let before = registry.store().snapshot();

        let result = registry
            .invoke("registerThing", &[payload(alice.thing_request(&["x", "y", "x"], "", &[0x01]))])
            .map(|_| ());

        assert_eq!(result, collision("x", CollisionKind::Alias));
        assert_eq!(registry.store().snapshot(), before);
    }

    #[test]
    fn test_alias_of_owners_own_name_rejected() {
        let alice = Registrant::new("alice");
        let mut registry = registry_with(&alice);

        let result = registry
            .invoke("registerThing", &[payload(alice.thing_request(&["alice"], "", &[0x01]))])
            .map(|_| ());

        assert_eq!(result, collision("alice", CollisionKind::Identity));
    }
}
