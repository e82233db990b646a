//! The uniform agent processing contract.

use crate::agent::domain::{AgentId, AgentRole, Capability};
use crate::agent::ports::LlmError;
use crate::message::{
    domain::{ExecutionContext, Message},
    error::MessageStoreError,
};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for agent processing.
pub type AgentResult<T> = Result<T, AgentError>;

/// Contract implemented by every agent, routers included.
///
/// Specialised agents (search, scraping, media, knowledge base, …) live
/// outside this crate and plug in by implementing this trait.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Returns the agent's stable identifier.
    fn id(&self) -> &AgentId;

    /// Returns the role the agent plays.
    fn role(&self) -> AgentRole;

    /// Returns the implementation name reported in routing metadata and
    /// in "no agent available" listings (e.g. `WebSearchAgent`).
    fn implementation_name(&self) -> &str;

    /// Returns the capabilities the agent advertises.
    ///
    /// Routers use these as the default registry tags.
    fn capabilities(&self) -> Vec<Capability> {
        Vec::new()
    }

    /// Handles a message and produces a response.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] when the agent cannot produce a response.
    async fn process_message(
        &self,
        message: &Message,
        context: Option<&ExecutionContext>,
    ) -> AgentResult<Message>;
}

/// Errors raised while an agent processes a message.
#[derive(Debug, Clone, Error)]
pub enum AgentError {
    /// The language model call failed.
    #[error("LLM request failed: {0}")]
    Llm(#[from] LlmError),

    /// Reading or writing conversation memory failed.
    #[error("memory error: {0}")]
    Memory(#[from] MessageStoreError),

    /// Any other processing failure.
    #[error("{0}")]
    Processing(String),
}

impl AgentError {
    /// Creates a generic processing error.
    #[must_use]
    pub fn processing(message: impl Into<String>) -> Self {
        Self::Processing(message.into())
    }
}
