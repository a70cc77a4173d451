//! Core identifier types for domain entities.
//!
//! Contacts in a key-addressed network are identified by their public key,
//! not by a mail address. The newtype wrapper keeps key identifiers from
//! being mixed up with ordinary display strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Public-key identifier for a contact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyId(pub String);

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for KeyId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for KeyId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
