//! # Canonical Messages
//!
//! The exact byte strings that registrants sign. Separators and ordering are
//! part of the protocol: any change breaks every existing signer.
//!
//! - RegisterIdentity: `owner_name ":" data`
//! - RegisterThing: `owner_name (":" alias)*`, aliases in request order

/// Separator between message fields.
pub const FIELD_SEPARATOR: char = ':';

/// Message signed by the key being registered in RegisterIdentity.
pub fn identity_message(owner_name: &str, data: &str) -> String {
    let mut message = String::with_capacity(owner_name.len() + 1 + data.len());
    message.push_str(owner_name);
    message.push(FIELD_SEPARATOR);
    message.push_str(data);
    message
}

/// Message signed by the owner's registered key in RegisterThing.
pub fn thing_message<A: AsRef<str>>(owner_name: &str, aliases: &[A]) -> String {
    let mut message = owner_name.to_string();
    for alias in aliases {
        message.push(FIELD_SEPARATOR);
        message.push_str(alias.as_ref());
    }
    message
}
