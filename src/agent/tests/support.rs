//! Shared doubles for agent tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::DefaultClock;

use crate::agent::{
    domain::{AgentId, AgentKind, AgentRole, Capability},
    ports::{Agent, AgentResult},
    services::{AgentBuildRequest, FactoryResult},
};
use crate::message::domain::{ExecutionContext, Message, MessageType};

/// Agent that echoes its kind back to the sender.
pub struct StubAgent {
    id: AgentId,
    kind: AgentKind,
}

impl StubAgent {
    pub const fn new(id: AgentId, kind: AgentKind) -> Self {
        Self { id, kind }
    }
}

#[async_trait]
impl Agent for StubAgent {
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
            format!("handled by {}", self.kind),
            MessageType::AgentResponse,
            &DefaultClock,
        ))
    }
}

/// Returns a builder closure producing [`StubAgent`]s of `kind`.
pub fn stub_builder(
    kind: AgentKind,
) -> impl Fn(AgentBuildRequest) -> FactoryResult<Arc<dyn Agent>> + Send + Sync + 'static {
    move |request: AgentBuildRequest| {
        let agent: Arc<dyn Agent> = Arc::new(StubAgent::new(request.agent_id, kind));
        Ok(agent)
    }
}

pub fn agent_id(value: &str) -> AgentId {
    AgentId::new(value).expect("test agent id should be valid")
}
