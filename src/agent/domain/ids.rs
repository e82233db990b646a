//! Validated agent identifier.

use super::AgentDomainError;
use crate::message::domain::ParticipantId;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_ID_LENGTH: usize = 128;

/// Stable identifier of an agent instance.
///
/// Agent identifiers key the router registry and appear in routing
/// metadata (e.g. `yt1`, `assistant_main`, `proxy:eu-1`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgentId(String);

impl AgentId {
    /// Creates a validated agent identifier.
    ///
    /// The input is trimmed. Case is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyAgentId`] when the value is empty
    /// after trimming, [`AgentDomainError::AgentIdTooLong`] when it exceeds
    /// 128 characters, or [`AgentDomainError::InvalidAgentId`] when it
    /// contains characters outside `[A-Za-z0-9_.:-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, AgentDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AgentDomainError::EmptyAgentId);
        }

        if trimmed.chars().count() > MAX_ID_LENGTH {
            return Err(AgentDomainError::AgentIdTooLong(raw));
        }

        let is_valid = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'));
        if !is_valid {
            return Err(AgentDomainError::InvalidAgentId(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns this agent as a message participant.
    #[must_use]
    pub fn participant(&self) -> ParticipantId {
        ParticipantId::new(self.0.as_str())
    }
}

impl AsRef<str> for AgentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AgentId {
    type Error = AgentDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AgentId> for String {
    fn from(value: AgentId) -> Self {
        value.0
    }
}
