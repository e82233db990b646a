//! The proxy router: classifies each message and forwards it to one agent.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::{AgentRegistry, RegisteredAgent, RegistryError, RegistryResult};
use crate::agent::{
    domain::{AgentId, AgentRole, Capability},
    ports::{Agent, AgentError, AgentResult},
};
use crate::message::{
    domain::{ConversationId, ExecutionContext, Message, MessageType},
    error::MessageStoreError,
    ports::{MessageStore, MessageStoreResult},
};
use crate::routing::{
    adapters::KeywordClassifier,
    domain::{ClassificationRequest, Intent, RoutingDecision},
    ports::IntentClassifier,
};

const DEFAULT_HISTORY_LIMIT: usize = 10;

const NO_AGENT_PREFIX: &str =
    "I couldn't find an appropriate agent to handle your request. Available agents: ";

/// Failures while dispatching a message.
///
/// These never escape [`Router::dispatch`]; they are reported through
/// [`DispatchOutcome::Failed`].
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// Recording the inbound message failed.
    #[error(transparent)]
    Store(#[from] MessageStoreError),
    /// The registry could not be read.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// The chosen agent failed.
    #[error("agent '{agent_id}' failed: {source}")]
    Agent {
        /// Agent that was handling the message.
        agent_id: AgentId,
        /// Error the agent returned.
        source: AgentError,
    },
}

/// Result of dispatching one message.
///
/// Every variant carries a response addressed to the original sender.
#[derive(Debug, Clone)]
pub enum DispatchOutcome {
    /// An agent handled the message; its response carries routing metadata.
    Routed {
        /// The agent's response.
        response: Message,
        /// Why the agent was chosen.
        decision: RoutingDecision,
    },
    /// No rule matched and no assistant is registered.
    NoAgent {
        /// Error-typed response listing the registered agents.
        response: Message,
    },
    /// Dispatch failed.
    Failed {
        /// Error-typed `Routing error: …` response.
        response: Message,
        /// The underlying failure.
        error: DispatchError,
    },
}

impl DispatchOutcome {
    /// Returns the response.
    #[must_use]
    pub const fn response(&self) -> &Message {
        match self {
            Self::Routed { response, .. }
            | Self::NoAgent { response }
            | Self::Failed { response, .. } => response,
        }
    }

    /// Consumes the outcome and returns the response.
    #[must_use]
    pub fn into_response(self) -> Message {
        match self {
            Self::Routed { response, .. }
            | Self::NoAgent { response }
            | Self::Failed { response, .. } => response,
        }
    }

    /// Returns the routing decision when an agent handled the message.
    #[must_use]
    pub const fn decision(&self) -> Option<&RoutingDecision> {
        match self {
            Self::Routed { decision, .. } => Some(decision),
            Self::NoAgent { .. } | Self::Failed { .. } => None,
        }
    }

    /// Returns `true` when an agent handled the message.
    #[must_use]
    pub const fn is_routed(&self) -> bool {
        matches!(self, Self::Routed { .. })
    }
}

/// Status of one registered agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentStatus {
    /// Agent identifier.
    pub agent_id: AgentId,
    /// Implementation name.
    pub implementation_name: String,
    /// Role the agent plays.
    pub role: AgentRole,
    /// Routing tags.
    pub tags: Vec<Capability>,
}

impl From<&RegisteredAgent> for AgentStatus {
    fn from(entry: &RegisteredAgent) -> Self {
        Self {
            agent_id: entry.id().clone(),
            implementation_name: entry.implementation_name().to_owned(),
            role: entry.role(),
            tags: entry.tags().iter().copied().collect(),
        }
    }
}

/// Snapshot of a router and its registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouterStatus {
    /// Router identifier.
    pub router_id: AgentId,
    /// Name of the intent classifier in use.
    pub classifier: String,
    /// Number of registered agents.
    pub total_agents: usize,
    /// Registered agents in registration order.
    pub agents: Vec<AgentStatus>,
}

/// Routes each inbound message to exactly one registered agent.
///
/// The router owns its registry. It is itself an [`Agent`] with the
/// [`AgentRole::Proxy`] role, so routers can be registered inside other
/// routers.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use ambivo_agents::agent::domain::AgentId;
/// use ambivo_agents::message::adapters::memory::InMemoryMessageStore;
/// use ambivo_agents::message::domain::{Message, MessageType, ParticipantId};
/// use ambivo_agents::routing::services::Router;
/// use mockable::DefaultClock;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let router = Router::new(
///     AgentId::new("proxy").expect("valid id"),
///     Arc::new(InMemoryMessageStore::new()),
/// );
/// let message = Message::builder(ParticipantId::new("user_1"), "hello").build(&DefaultClock);
///
/// let response = router.dispatch(&message, None).await.into_response();
/// assert_eq!(response.message_type(), MessageType::Error);
/// assert!(response.content().ends_with("Available agents: []"));
/// # });
/// ```
pub struct Router {
    id: AgentId,
    registry: AgentRegistry,
    memory: Arc<dyn MessageStore>,
    classifier: Arc<dyn IntentClassifier>,
    clock: Arc<dyn Clock + Send + Sync>,
    history_limit: usize,
}

impl Router {
    /// Creates a router with an empty registry and keyword classification.
    #[must_use]
    pub fn new(id: AgentId, memory: Arc<dyn MessageStore>) -> Self {
        Self {
            id,
            registry: AgentRegistry::new(),
            memory,
            classifier: Arc::new(KeywordClassifier::new()),
            clock: Arc::new(DefaultClock),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Replaces the intent classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Arc<dyn IntentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replaces the clock used to stamp error responses.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        self.clock = clock;
        self
    }

    /// Sets the window used by [`Router::recent_history`].
    #[must_use]
    pub const fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Returns the router's registry.
    #[must_use]
    pub const fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Registers an agent under the capabilities it declares.
    ///
    /// Returns `true` on success. Registering an id again replaces the
    /// earlier entry.
    pub fn register_agent(&self, agent: Arc<dyn Agent>) -> bool {
        self.registry.register(agent)
    }

    /// Registers an agent under explicit capability tags.
    pub fn register_agent_with_tags(
        &self,
        agent: Arc<dyn Agent>,
        tags: impl IntoIterator<Item = Capability>,
    ) -> bool {
        self.registry.register_with_tags(agent, tags)
    }

    /// Removes an agent. Returns `false` when the id is not registered.
    pub fn unregister_agent(&self, agent_id: &AgentId) -> bool {
        self.registry.unregister(agent_id)
    }

    /// Returns the registered agents in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Poisoned`] when the registry lock is poisoned.
    pub fn get_registered_agents(&self) -> RegistryResult<Vec<RegisteredAgent>> {
        self.registry.agents()
    }

    /// Chooses the agent for some content without forwarding anything.
    ///
    /// No conversation history is consulted.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Poisoned`] when the registry lock is poisoned.
    pub async fn route(&self, content: &str) -> RegistryResult<Option<RoutingDecision>> {
        let agents = self.registry.agents()?;
        let routable = routable_intents(&agents);
        let request = ClassificationRequest::new(content).with_routable(&routable);
        let intent = self.classifier.classify(&request).await;
        Ok(select_agent(&agents, intent).map(|(_, decision)| decision))
    }

    /// Dispatches a message to the best registered agent.
    ///
    /// The inbound message is recorded in memory, classified against the
    /// registered agents and the recent conversation, and forwarded
    /// unmodified. Failures and routing misses come back as error-typed
    /// responses rather than errors.
    pub async fn dispatch(
        &self,
        message: &Message,
        context: Option<&ExecutionContext>,
    ) -> DispatchOutcome {
        match self.try_dispatch(message, context).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(
                    router_id = %self.id,
                    message_id = %message.id(),
                    error = %err,
                    "routing failed"
                );
                DispatchOutcome::Failed {
                    response: self.error_response(message, format!("Routing error: {err}")),
                    error: err,
                }
            }
        }
    }

    /// Returns a snapshot of the router and its registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Poisoned`] when the registry lock is poisoned.
    pub fn status(&self) -> RegistryResult<RouterStatus> {
        let agents = self.registry.agents()?;
        Ok(RouterStatus {
            router_id: self.id.clone(),
            classifier: self.classifier.name().to_owned(),
            total_agents: agents.len(),
            agents: agents.iter().map(AgentStatus::from).collect(),
        })
    }

    /// Returns up to `limit` recorded messages of a conversation, oldest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError`] when memory cannot be read.
    pub async fn conversation_history(
        &self,
        conversation_id: Option<ConversationId>,
        limit: usize,
    ) -> MessageStoreResult<Vec<Message>> {
        self.memory.recent_messages(conversation_id, limit).await
    }

    /// Returns the configured window of recorded messages of a conversation.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError`] when memory cannot be read.
    pub async fn recent_history(
        &self,
        conversation_id: Option<ConversationId>,
    ) -> MessageStoreResult<Vec<Message>> {
        self.conversation_history(conversation_id, self.history_limit)
            .await
    }

    /// Forgets the recorded messages of a conversation.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError`] when memory cannot be cleared.
    pub async fn clear_history(
        &self,
        conversation_id: Option<ConversationId>,
    ) -> MessageStoreResult<()> {
        self.memory.clear(conversation_id).await
    }

    async fn try_dispatch(
        &self,
        message: &Message,
        context: Option<&ExecutionContext>,
    ) -> Result<DispatchOutcome, DispatchError> {
        self.memory.store(message).await?;
        let history: Vec<Message> = self
            .recent_history(message.conversation_id())
            .await?
            .into_iter()
            .filter(|turn| turn.id() != message.id())
            .collect();

        let agents = self.registry.agents()?;
        let routable = routable_intents(&agents);
        let request = ClassificationRequest::new(message.content())
            .with_routable(&routable)
            .with_history(&history);
        let intent = self.classifier.classify(&request).await;
        debug!(router_id = %self.id, intent = ?intent, "message classified");

        let Some((entry, decision)) = select_agent(&agents, intent) else {
            let available: Vec<String> = agents.iter().map(RegisteredAgent::label).collect();
            warn!(
                router_id = %self.id,
                intent = ?intent,
                available = ?available,
                "no agent available"
            );
            let content = format!("{NO_AGENT_PREFIX}[{}]", available.join(", "));
            return Ok(DispatchOutcome::NoAgent {
                response: self.error_response(message, content),
            });
        };

        info!(
            router_id = %self.id,
            agent_id = %decision.agent_id,
            implementation = %decision.implementation_name,
            reason = %decision.reason,
            "routing message"
        );
        let mut response = entry
            .agent()
            .process_message(message, context)
            .await
            .map_err(|source| DispatchError::Agent {
                agent_id: entry.id().clone(),
                source,
            })?;
        response.annotate_routing(decision.to_metadata(self.id.as_str()));
        Ok(DispatchOutcome::Routed { response, decision })
    }

    fn error_response(&self, message: &Message, content: String) -> Message {
        message.reply(self.id.participant(), content, MessageType::Error, &*self.clock)
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("id", &self.id)
            .field("classifier", &self.classifier.name())
            .field("registry", &self.registry)
            .field("history_limit", &self.history_limit)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Agent for Router {
    fn id(&self) -> &AgentId {
        &self.id
    }

    fn role(&self) -> AgentRole {
        AgentRole::Proxy
    }

    fn implementation_name(&self) -> &str {
        "ProxyAgent"
    }

    async fn process_message(
        &self,
        message: &Message,
        context: Option<&ExecutionContext>,
    ) -> AgentResult<Message> {
        Ok(self.dispatch(message, context).await.into_response())
    }
}

/// Lists the intents at least one registered agent serves, in priority
/// order.
fn routable_intents(agents: &[RegisteredAgent]) -> Vec<Intent> {
    Intent::ALL
        .into_iter()
        .filter(|intent| agents.iter().any(|entry| entry.serves(intent.target())))
        .collect()
}

/// Picks the first agent serving the intent's target, else the first
/// assistant.
fn select_agent(
    agents: &[RegisteredAgent],
    intent: Option<Intent>,
) -> Option<(&RegisteredAgent, RoutingDecision)> {
    let matched = intent.and_then(|wanted| {
        agents
            .iter()
            .find(|entry| entry.serves(wanted.target()))
            .map(|entry| {
                let decision = RoutingDecision::matched(
                    entry.id().clone(),
                    entry.implementation_name(),
                    wanted,
                );
                (entry, decision)
            })
    });
    matched.or_else(|| {
        agents
            .iter()
            .find(|entry| entry.role() == AgentRole::Assistant)
            .map(|entry| {
                let decision = RoutingDecision::defaulted(
                    entry.id().clone(),
                    entry.implementation_name(),
                    intent,
                );
                (entry, decision)
            })
    })
}
