//! Port contracts for agents and their collaborators.

pub mod agent;
pub mod llm;

pub use agent::{Agent, AgentError, AgentResult};
pub use llm::{LlmError, LlmRequest, LlmService};
