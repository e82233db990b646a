//! Built-in general assistant backed by the LLM port.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use tracing::debug;

use crate::agent::{
    domain::{AgentId, AgentRole},
    ports::{Agent, AgentResult, LlmRequest, LlmService},
};
use crate::message::{
    domain::{ExecutionContext, Message, MessageType},
    ports::MessageStore,
};

const DEFAULT_SYSTEM_MESSAGE: &str = "You are a helpful assistant. Answer clearly and concisely, \
     and use earlier turns of the conversation when the user refers back to them.";

const DEFAULT_HISTORY_LIMIT: usize = 10;

/// General-purpose assistant; the router's fallback destination.
///
/// Each turn is recorded in the agent's memory, and the most recent turns of
/// the same conversation are replayed to the model as context.
pub struct AssistantAgent {
    id: AgentId,
    llm: Arc<dyn LlmService>,
    memory: Arc<dyn MessageStore>,
    system_message: String,
    history_limit: usize,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl AssistantAgent {
    /// Creates an assistant with the default system message.
    #[must_use]
    pub fn new(id: AgentId, llm: Arc<dyn LlmService>, memory: Arc<dyn MessageStore>) -> Self {
        Self {
            id,
            llm,
            memory,
            system_message: DEFAULT_SYSTEM_MESSAGE.to_owned(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            clock: Arc::new(DefaultClock),
        }
    }

    /// Replaces the system message.
    #[must_use]
    pub fn with_system_message(mut self, system_message: impl Into<String>) -> Self {
        self.system_message = system_message.into();
        self
    }

    /// Sets how many earlier messages are replayed as context.
    #[must_use]
    pub const fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Replaces the clock used to timestamp replies.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the system message sent with every request.
    #[must_use]
    pub fn system_message(&self) -> &str {
        &self.system_message
    }

    fn build_prompt(message: &Message, history: &[Message]) -> String {
        let earlier: Vec<&Message> = history
            .iter()
            .filter(|turn| turn.id() != message.id())
            .collect();
        if earlier.is_empty() {
            return message.content().to_owned();
        }

        let mut prompt = String::from("Conversation so far:\n");
        for turn in earlier {
            prompt.push_str(&format!("{}: {}\n", turn.sender_id(), turn.content()));
        }
        prompt.push_str("\nCurrent request:\n");
        prompt.push_str(message.content());
        prompt
    }
}

#[async_trait]
impl Agent for AssistantAgent {
    fn id(&self) -> &AgentId {
        &self.id
    }

    fn role(&self) -> AgentRole {
        AgentRole::Assistant
    }

    fn implementation_name(&self) -> &str {
        "AssistantAgent"
    }

    async fn process_message(
        &self,
        message: &Message,
        _context: Option<&ExecutionContext>,
    ) -> AgentResult<Message> {
        self.memory.store(message).await?;
        let history = self
            .memory
            .recent_messages(message.conversation_id(), self.history_limit)
            .await?;

        let prompt = Self::build_prompt(message, &history);
        debug!(agent_id = %self.id, history = history.len(), "assistant calling llm");
        let request = LlmRequest::new(prompt).with_system_message(self.system_message.as_str());
        let answer = self.llm.generate(&request).await?;

        let reply = message.reply(
            self.id.participant(),
            answer,
            MessageType::AgentResponse,
            &*self.clock,
        );
        self.memory.store(&reply).await?;
        Ok(reply)
    }
}
