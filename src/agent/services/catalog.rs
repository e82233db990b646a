//! Builders the factory uses to instantiate each agent kind.
//!
//! Specialised agents are implemented outside this crate; applications
//! register a builder per kind. The assistant and the proxy ship built in.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::{FactoryError, FactoryResult};
use crate::agent::{
    adapters::AssistantAgent,
    domain::{AgentId, AgentKind},
    ports::{Agent, LlmService},
};
use crate::message::ports::MessageStore;
use crate::routing::{adapters::LlmIntentClassifier, services::Router};

/// Option key selecting the proxy's classifier (`"keyword"` or `"llm"`).
pub const CLASSIFIER_OPTION: &str = "classifier";
/// Option key overriding the assistant's system message.
pub const SYSTEM_MESSAGE_OPTION: &str = "system_message";
/// Option key overriding the history window of assistants and routers.
pub const HISTORY_LIMIT_OPTION: &str = "history_limit";

/// Collaborators and passthrough options for building one agent.
#[derive(Clone)]
pub struct AgentBuildRequest {
    /// Identifier the new agent will carry.
    pub agent_id: AgentId,
    /// Conversation memory handle.
    pub memory: Arc<dyn MessageStore>,
    /// Language-model handle, when the deployment has one.
    pub llm: Option<Arc<dyn LlmService>>,
    /// Passthrough construction options.
    pub options: Map<String, Value>,
}

impl AgentBuildRequest {
    /// Creates a request with no LLM and no options.
    #[must_use]
    pub fn new(agent_id: AgentId, memory: Arc<dyn MessageStore>) -> Self {
        Self {
            agent_id,
            memory,
            llm: None,
            options: Map::new(),
        }
    }

    /// Supplies a language model.
    #[must_use]
    pub fn with_llm(mut self, llm: Arc<dyn LlmService>) -> Self {
        self.llm = Some(llm);
        self
    }

    /// Adds a passthrough option.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Returns a passthrough option.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}

impl fmt::Debug for AgentBuildRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentBuildRequest")
            .field("agent_id", &self.agent_id)
            .field("has_llm", &self.llm.is_some())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Constructs agents of one kind.
///
/// Any `Fn(AgentBuildRequest) -> FactoryResult<Arc<dyn Agent>>` closure is a
/// builder.
pub trait AgentBuilder: Send + Sync {
    /// Builds an agent from the request.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError`] when a collaborator is missing or the agent
    /// cannot be constructed.
    fn build(&self, request: AgentBuildRequest) -> FactoryResult<Arc<dyn Agent>>;
}

impl<F> AgentBuilder for F
where
    F: Fn(AgentBuildRequest) -> FactoryResult<Arc<dyn Agent>> + Send + Sync,
{
    fn build(&self, request: AgentBuildRequest) -> FactoryResult<Arc<dyn Agent>> {
        self(request)
    }
}

/// Maps agent kinds to their builders.
#[derive(Clone, Default)]
pub struct AgentCatalog {
    builders: HashMap<AgentKind, Arc<dyn AgentBuilder>>,
}

impl AgentCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the built-in assistant and proxy builders.
    #[must_use]
    pub fn with_builtin() -> Self {
        Self::new()
            .with_builder(AgentKind::Assistant, build_assistant)
            .with_builder(AgentKind::Proxy, build_proxy)
    }

    /// Registers or replaces the builder for a kind.
    #[must_use]
    pub fn with_builder(mut self, kind: AgentKind, builder: impl AgentBuilder + 'static) -> Self {
        self.builders.insert(kind, Arc::new(builder));
        self
    }

    /// Returns the builder for a kind.
    #[must_use]
    pub fn builder(&self, kind: AgentKind) -> Option<&Arc<dyn AgentBuilder>> {
        self.builders.get(&kind)
    }

    /// Returns whether a builder is registered for a kind.
    #[must_use]
    pub fn contains(&self, kind: AgentKind) -> bool {
        self.builders.contains_key(&kind)
    }
}

impl fmt::Debug for AgentCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<AgentKind> = self.builders.keys().copied().collect();
        kinds.sort();
        f.debug_struct("AgentCatalog").field("kinds", &kinds).finish()
    }
}

fn build_assistant(request: AgentBuildRequest) -> FactoryResult<Arc<dyn Agent>> {
    let AgentBuildRequest {
        agent_id,
        memory,
        llm,
        options,
    } = request;
    let Some(llm_service) = llm else {
        return Err(FactoryError::MissingCollaborator {
            kind: AgentKind::Assistant,
            collaborator: "LLM service",
        });
    };

    let mut agent = AssistantAgent::new(agent_id, llm_service, memory);
    if let Some(system_message) = options.get(SYSTEM_MESSAGE_OPTION) {
        let text = system_message.as_str().ok_or_else(|| FactoryError::Build {
            kind: AgentKind::Assistant,
            reason: format!("option '{SYSTEM_MESSAGE_OPTION}' must be a string"),
        })?;
        agent = agent.with_system_message(text);
    }
    if let Some(limit) = options.get(HISTORY_LIMIT_OPTION) {
        agent = agent.with_history_limit(history_limit(AgentKind::Assistant, limit)?);
    }
    Ok(Arc::new(agent))
}

fn build_proxy(request: AgentBuildRequest) -> FactoryResult<Arc<dyn Agent>> {
    let AgentBuildRequest {
        agent_id,
        memory,
        llm,
        options,
    } = request;
    let mut router = Router::new(agent_id, memory);
    if let Some(limit) = options.get(HISTORY_LIMIT_OPTION) {
        router = router.with_history_limit(history_limit(AgentKind::Proxy, limit)?);
    }
    let wants_llm = options
        .get(CLASSIFIER_OPTION)
        .and_then(Value::as_str)
        .is_some_and(|name| name.eq_ignore_ascii_case("llm"));
    if !wants_llm {
        return Ok(Arc::new(router));
    }

    let Some(llm_service) = llm else {
        return Err(FactoryError::MissingCollaborator {
            kind: AgentKind::Proxy,
            collaborator: "LLM service",
        });
    };
    Ok(Arc::new(
        router.with_classifier(Arc::new(LlmIntentClassifier::new(llm_service))),
    ))
}

fn history_limit(kind: AgentKind, value: &Value) -> FactoryResult<usize> {
    value
        .as_u64()
        .and_then(|raw| usize::try_from(raw).ok())
        .ok_or_else(|| FactoryError::Build {
            kind,
            reason: format!("option '{HISTORY_LIMIT_OPTION}' must be a non-negative integer"),
        })
}
