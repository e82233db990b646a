//! Error types for agent domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing agent domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AgentDomainError {
    /// The agent identifier is empty after trimming.
    #[error("agent identifier must not be empty")]
    EmptyAgentId,

    /// The agent identifier contains characters outside `[A-Za-z0-9_.:-]`.
    #[error(
        "agent identifier '{0}' contains invalid characters (only alphanumerics, '_', '-', '.' and ':' allowed)"
    )]
    InvalidAgentId(String),

    /// The agent identifier exceeds the length limit.
    #[error("agent identifier exceeds 128 character limit: {0}")]
    AgentIdTooLong(String),
}

/// Error returned while parsing an agent role name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown agent role: {0}")]
pub struct ParseAgentRoleError(pub String);

/// Error returned while parsing an agent type name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown agent type: {0}")]
pub struct ParseAgentKindError(pub String);

/// Error returned while parsing a capability name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown capability: {0}")]
pub struct ParseCapabilityError(pub String);
