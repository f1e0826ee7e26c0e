//! # Exploit Simulations
//!
//! Each module plays one attacker against the admission path and asserts
//! the attack is rejected with zero state change.

pub mod alias_squatting;
pub mod tampering;
