//! Agent roles.

use super::ParseAgentRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The role an agent plays in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    /// General-purpose conversational assistant; the router's default.
    Assistant,
    /// Router that forwards messages to other agents.
    Proxy,
    /// Data analysis.
    Analyst,
    /// Information gathering; resolved to a specialised agent by the factory.
    Researcher,
    /// Multi-agent coordination.
    Coordinator,
    /// Output validation.
    Validator,
    /// Code execution.
    CodeExecutor,
}

impl AgentRole {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assistant => "assistant",
            Self::Proxy => "proxy",
            Self::Analyst => "analyst",
            Self::Researcher => "researcher",
            Self::Coordinator => "coordinator",
            Self::Validator => "validator",
            Self::CodeExecutor => "code_executor",
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AgentRole {
    type Error = ParseAgentRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "assistant" => Ok(Self::Assistant),
            "proxy" => Ok(Self::Proxy),
            "analyst" => Ok(Self::Analyst),
            "researcher" => Ok(Self::Researcher),
            "coordinator" => Ok(Self::Coordinator),
            "validator" => Ok(Self::Validator),
            "code_executor" => Ok(Self::CodeExecutor),
            _ => Err(ParseAgentRoleError(value.to_owned())),
        }
    }
}
