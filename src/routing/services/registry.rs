//! Ordered registry of the agents a router can dispatch to.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, RwLock};

use thiserror::Error;
use tracing::{error, info, warn};

use crate::agent::{
    domain::{AgentId, AgentRole, Capability},
    ports::Agent,
};
use crate::routing::domain::RouteTarget;

/// Errors raised while reading the registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry lock was poisoned by a panicking writer.
    #[error("agent registry lock poisoned: {0}")]
    Poisoned(String),
}

/// Result type for registry reads.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// One registered agent and the capability tags it is routed by.
#[derive(Clone)]
pub struct RegisteredAgent {
    agent: Arc<dyn Agent>,
    tags: BTreeSet<Capability>,
}

impl RegisteredAgent {
    /// Creates an entry with explicit tags.
    #[must_use]
    pub fn new(agent: Arc<dyn Agent>, tags: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            agent,
            tags: tags.into_iter().collect(),
        }
    }

    /// Creates an entry tagged with the capabilities the agent declares.
    #[must_use]
    pub fn with_declared_tags(agent: Arc<dyn Agent>) -> Self {
        let tags = agent.capabilities();
        Self::new(agent, tags)
    }

    /// Returns the agent.
    #[must_use]
    pub const fn agent(&self) -> &Arc<dyn Agent> {
        &self.agent
    }

    /// Returns the agent identifier.
    #[must_use]
    pub fn id(&self) -> &AgentId {
        self.agent.id()
    }

    /// Returns the agent's implementation name.
    #[must_use]
    pub fn implementation_name(&self) -> &str {
        self.agent.implementation_name()
    }

    /// Returns the agent's role.
    #[must_use]
    pub fn role(&self) -> AgentRole {
        self.agent.role()
    }

    /// Returns the routing tags.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<Capability> {
        &self.tags
    }

    /// Returns whether this entry can serve the target.
    #[must_use]
    pub fn serves(&self, target: RouteTarget) -> bool {
        match target {
            RouteTarget::Capability(capability) => self.tags.contains(&capability),
            RouteTarget::Role(role) => self.role() == role,
        }
    }

    /// Formats the entry as `Implementation (id)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.implementation_name(), self.id())
    }
}

impl fmt::Debug for RegisteredAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredAgent")
            .field("id", self.id())
            .field("implementation", &self.implementation_name())
            .field("role", &self.role())
            .field("tags", &self.tags)
            .finish()
    }
}

/// Thread-safe, registration-ordered agent registry.
///
/// The lock guards mutation and snapshotting only. Readers receive cloned
/// entries, so callers never hold the lock while an agent runs.
#[derive(Debug, Default)]
pub struct AgentRegistry {
    entries: RwLock<Vec<RegisteredAgent>>,
}

impl AgentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an agent under the tags it declares.
    ///
    /// Returns `true` when the agent is registered. Registering an id again
    /// replaces the earlier entry in place, keeping its position.
    pub fn register(&self, agent: Arc<dyn Agent>) -> bool {
        self.insert(RegisteredAgent::with_declared_tags(agent))
    }

    /// Registers an agent under explicit tags, overriding its declared ones.
    pub fn register_with_tags(
        &self,
        agent: Arc<dyn Agent>,
        tags: impl IntoIterator<Item = Capability>,
    ) -> bool {
        self.insert(RegisteredAgent::new(agent, tags))
    }

    /// Removes an agent.
    ///
    /// Returns `false`, leaving the registry unchanged, when no agent has the
    /// id.
    pub fn unregister(&self, agent_id: &AgentId) -> bool {
        let Ok(mut entries) = self.entries.write() else {
            error!(agent_id = %agent_id, "agent registry lock poisoned during unregistration");
            return false;
        };
        let Some(position) = entries.iter().position(|entry| entry.id() == agent_id) else {
            warn!(agent_id = %agent_id, "unregister requested for unknown agent");
            return false;
        };
        entries.remove(position);
        info!(agent_id = %agent_id, "agent unregistered");
        true
    }

    /// Returns a snapshot of the entries in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Poisoned`] when the lock is poisoned.
    pub fn agents(&self) -> RegistryResult<Vec<RegisteredAgent>> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .map_err(|err| RegistryError::Poisoned(err.to_string()))
    }

    /// Returns the entry for an agent id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Poisoned`] when the lock is poisoned.
    pub fn get(&self, agent_id: &AgentId) -> RegistryResult<Option<RegisteredAgent>> {
        self.entries
            .read()
            .map(|entries| entries.iter().find(|entry| entry.id() == agent_id).cloned())
            .map_err(|err| RegistryError::Poisoned(err.to_string()))
    }

    /// Returns the number of registered agents.
    ///
    /// Returns `0` if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Returns `true` if no agents are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&self, entry: RegisteredAgent) -> bool {
        let Ok(mut entries) = self.entries.write() else {
            error!(agent_id = %entry.id(), "agent registry lock poisoned during registration");
            return false;
        };
        let position = entries
            .iter()
            .position(|existing| existing.id() == entry.id())
            .unwrap_or(entries.len());
        let replaced = position < entries.len();
        if replaced {
            entries.remove(position);
        }
        info!(
            agent_id = %entry.id(),
            implementation = entry.implementation_name(),
            tags = ?entry.tags(),
            replaced,
            "agent registered"
        );
        entries.insert(position, entry);
        true
    }
}
