//! Agent and store doubles for routing tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::DefaultClock;

use crate::agent::{
    domain::{AgentId, AgentRole, Capability},
    ports::{Agent, AgentError, AgentResult},
};
use crate::message::{
    domain::{ConversationId, ExecutionContext, Message, MessageType},
    error::MessageStoreError,
    ports::{MessageStore, MessageStoreResult},
};

/// Agent with a fixed identity that answers `"<id> handled: <content>"`.
pub struct FakeAgent {
    id: AgentId,
    role: AgentRole,
    implementation: &'static str,
    capabilities: Vec<Capability>,
    fails: bool,
}

impl FakeAgent {
    pub fn new(id: &str, role: AgentRole, implementation: &'static str) -> Self {
        Self {
            id: AgentId::new(id).expect("test agent id should be valid"),
            role,
            implementation,
            capabilities: Vec::new(),
            fails: false,
        }
    }

    pub fn assistant(id: &str) -> Arc<dyn Agent> {
        Arc::new(Self::new(id, AgentRole::Assistant, "AssistantAgent"))
    }

    pub fn specialist(
        id: &str,
        implementation: &'static str,
        capability: Capability,
    ) -> Arc<dyn Agent> {
        Arc::new(Self::new(id, AgentRole::Researcher, implementation).with_capability(capability))
    }

    pub fn code_executor(id: &str) -> Arc<dyn Agent> {
        Arc::new(Self::new(id, AgentRole::CodeExecutor, "CodeExecutorAgent"))
    }

    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.push(capability);
        self
    }

    pub const fn failing(mut self) -> Self {
        self.fails = true;
        self
    }
}

#[async_trait]
impl Agent for FakeAgent {
    fn id(&self) -> &AgentId {
        &self.id
    }

    fn role(&self) -> AgentRole {
        self.role
    }

    fn implementation_name(&self) -> &str {
        self.implementation
    }

    fn capabilities(&self) -> Vec<Capability> {
        self.capabilities.clone()
    }

    async fn process_message(
        &self,
        message: &Message,
        _context: Option<&ExecutionContext>,
    ) -> AgentResult<Message> {
        if self.fails {
            return Err(AgentError::processing("backend offline"));
        }
        Ok(message.reply(
            self.id.participant(),
            format!("{} handled: {}", self.id, message.content()),
            MessageType::AgentResponse,
            &DefaultClock,
        ))
    }
}

/// Store whose writes always fail.
pub struct BrokenStore;

#[async_trait]
impl MessageStore for BrokenStore {
    async fn store(&self, _message: &Message) -> MessageStoreResult<()> {
        Err(MessageStoreError::poisoned("disk full"))
    }

    async fn recent_messages(
        &self,
        _conversation_id: Option<ConversationId>,
        _limit: usize,
    ) -> MessageStoreResult<Vec<Message>> {
        Ok(Vec::new())
    }

    async fn clear(&self, _conversation_id: Option<ConversationId>) -> MessageStoreResult<()> {
        Ok(())
    }
}
