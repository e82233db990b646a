//! Message type classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Kind of a message envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// Input typed by a human or forwarded by an upstream caller.
    UserInput,
    /// Output produced by an agent.
    AgentResponse,
    /// Instruction injected by the system.
    SystemMessage,
    /// A tool invocation request.
    ToolCall,
    /// The result of a tool invocation.
    ToolResponse,
    /// A user-visible error report.
    Error,
    /// Progress or status notification.
    StatusUpdate,
}

impl MessageType {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserInput => "user_input",
            Self::AgentResponse => "agent_response",
            Self::SystemMessage => "system_message",
            Self::ToolCall => "tool_call",
            Self::ToolResponse => "tool_response",
            Self::Error => "error",
            Self::StatusUpdate => "status_update",
        }
    }

    /// Returns `true` for error-typed messages.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown message type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown message type: {0}")]
pub struct ParseMessageTypeError(pub String);

impl TryFrom<&str> for MessageType {
    type Error = ParseMessageTypeError;

    fn try_from(value: &str) -> Result<Self, ParseMessageTypeError> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "user_input" => Ok(Self::UserInput),
            "agent_response" => Ok(Self::AgentResponse),
            "system_message" => Ok(Self::SystemMessage),
            "tool_call" => Ok(Self::ToolCall),
            "tool_response" => Ok(Self::ToolResponse),
            "error" => Ok(Self::Error),
            "status_update" => Ok(Self::StatusUpdate),
            _ => Err(ParseMessageTypeError(value.to_owned())),
        }
    }
}
