//! Sender and recipient identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a message sender or recipient.
///
/// Participants are users, upstream services or agents. The value is opaque
/// and is not validated beyond trimming, since callers outside the framework
/// choose their own identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Creates a participant identifier from a raw value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let raw = value.into();
        Self(raw.trim().to_owned())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ParticipantId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
