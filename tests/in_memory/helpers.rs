//! Shared test helpers for in-memory integration tests.

use std::sync::{Arc, Mutex};

use ambivo_agents::{
    agent::{
        domain::{AgentId, AgentKind, AgentRole, Capability},
        ports::{Agent, AgentResult, LlmError, LlmRequest, LlmService},
        services::{AgentBuildRequest, AgentCatalog, FactoryResult},
    },
    message::{
        adapters::memory::InMemoryMessageStore,
        domain::{ConversationId, ExecutionContext, Message, MessageType, ParticipantId, SessionId},
    },
};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::fixture;

/// Language model that always answers with the same text.
pub struct ScriptedLlm {
    reply: String,
}

impl ScriptedLlm {
    /// Creates a model answering `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl LlmService for ScriptedLlm {
    async fn generate(&self, _request: &LlmRequest) -> Result<String, LlmError> {
        Ok(self.reply.clone())
    }
}

/// Language model that records every prompt it receives.
#[derive(Default)]
pub struct RecordingLlm {
    prompts: Mutex<Vec<String>>,
}

impl RecordingLlm {
    /// Returns the prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log lock").clone()
    }
}

#[async_trait]
impl LlmService for RecordingLlm {
    async fn generate(&self, request: &LlmRequest) -> Result<String, LlmError> {
        self.prompts
            .lock()
            .expect("prompt log lock")
            .push(request.prompt.clone());
        Ok("ok".to_owned())
    }
}

/// Stand-in for an externally implemented agent of a given kind.
pub struct SpecialistAgent {
    id: AgentId,
    kind: AgentKind,
}

impl SpecialistAgent {
    /// Creates a specialist agent.
    pub fn new(id: &str, kind: AgentKind) -> Self {
        Self {
            id: agent_id(id),
            kind,
        }
    }

    /// Creates a shared specialist agent.
    pub fn shared(id: &str, kind: AgentKind) -> Arc<dyn Agent> {
        Arc::new(Self::new(id, kind))
    }
}

#[async_trait]
impl Agent for SpecialistAgent {
    fn id(&self) -> &AgentId {
        &self.id
    }

    fn role(&self) -> AgentRole {
        self.kind.role()
    }

    fn implementation_name(&self) -> &str {
        self.kind.implementation_name()
    }

    fn capabilities(&self) -> Vec<Capability> {
        self.kind.default_capabilities()
    }

    async fn process_message(
        &self,
        message: &Message,
        _context: Option<&ExecutionContext>,
    ) -> AgentResult<Message> {
        Ok(message.reply(
            self.id.participant(),
            format!("{} processed the request", self.kind.implementation_name()),
            MessageType::AgentResponse,
            &DefaultClock,
        ))
    }
}

/// Builds a validated agent identifier.
pub fn agent_id(value: &str) -> AgentId {
    AgentId::new(value).expect("test agent id should be valid")
}

/// Provides a fresh shared message store for each test.
#[fixture]
pub fn memory() -> Arc<InMemoryMessageStore> {
    Arc::new(InMemoryMessageStore::new())
}

/// Provides a catalog with the built-in assistant and proxy plus
/// [`SpecialistAgent`] builders for every other kind.
#[fixture]
pub fn catalog() -> AgentCatalog {
    AgentKind::ALL
        .into_iter()
        .filter(|kind| !matches!(kind, AgentKind::Assistant | AgentKind::Proxy))
        .fold(AgentCatalog::with_builtin(), |catalog, kind| {
            catalog.with_builder(
                kind,
                move |request: AgentBuildRequest| -> FactoryResult<Arc<dyn Agent>> {
                    Ok(Arc::new(SpecialistAgent {
                        id: request.agent_id,
                        kind,
                    }))
                },
            )
        })
}

/// Builds a request carrying a scripted language model.
pub fn build_request(id: &str, memory: &Arc<InMemoryMessageStore>) -> AgentBuildRequest {
    AgentBuildRequest::new(agent_id(id), memory.clone())
        .with_llm(Arc::new(ScriptedLlm::new("assistant answer")))
}

/// Builds a user message in a fresh session and conversation.
pub fn user_message(content: &str) -> Message {
    user_message_in(ConversationId::new(), content)
}

/// Builds a user message in an existing conversation.
pub fn user_message_in(conversation_id: ConversationId, content: &str) -> Message {
    Message::builder(ParticipantId::new("user_1"), content)
        .to(ParticipantId::new("proxy"))
        .in_session(SessionId::new())
        .in_conversation(conversation_id)
        .build(&DefaultClock)
}
