//! Capability-gated agent construction.

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use super::{AgentBuildRequest, AgentCatalog};
use crate::agent::{
    domain::{AgentKind, AgentRole, Capability, CapabilityFlags},
    ports::Agent,
};

/// Order in which researcher specialisations are considered.
///
/// The first kind whose capability is enabled becomes the researcher.
pub const RESEARCHER_PRIORITY: [AgentKind; 5] = [
    AgentKind::KnowledgeBase,
    AgentKind::WebSearch,
    AgentKind::YoutubeDownload,
    AgentKind::WebScraper,
    AgentKind::MediaEditor,
];

/// Errors raised while constructing agents.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// The kind's capability is disabled in configuration.
    #[error("{} is not enabled in the agent configuration (required by '{kind}')", .capability.label())]
    CapabilityDisabled {
        /// Kind that was requested.
        kind: AgentKind,
        /// Capability that gates it.
        capability: Capability,
    },
    /// The factory has no construction rule for this role.
    #[error("unsupported agent role: {0}")]
    UnsupportedRole(AgentRole),
    /// The type name is unknown or not a specialised type.
    #[error("unknown or unavailable agent type: {0}")]
    UnsupportedAgentType(String),
    /// No builder is registered for the kind.
    #[error("no builder registered for agent type '{0}'")]
    BuilderUnavailable(AgentKind),
    /// A collaborator the builder needs was not supplied.
    #[error("agent type '{kind}' requires a {collaborator}")]
    MissingCollaborator {
        /// Kind being built.
        kind: AgentKind,
        /// Description of the missing collaborator.
        collaborator: &'static str,
    },
    /// The builder rejected the request.
    #[error("failed to build '{kind}': {reason}")]
    Build {
        /// Kind being built.
        kind: AgentKind,
        /// Builder-supplied reason.
        reason: String,
    },
}

/// Result type for factory operations.
pub type FactoryResult<T> = Result<T, FactoryError>;

/// Builds agents by role or by specialised type name.
///
/// Capability flags are fixed at construction. No path through the factory
/// builds a kind whose capability is disabled.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use ambivo_agents::agent::domain::{AgentId, AgentRole, CapabilityFlags};
/// use ambivo_agents::agent::services::{AgentBuildRequest, AgentCatalog, AgentFactory};
/// use ambivo_agents::message::adapters::memory::InMemoryMessageStore;
///
/// let factory = AgentFactory::new(CapabilityFlags::new(), AgentCatalog::with_builtin());
/// let request = AgentBuildRequest::new(
///     AgentId::new("proxy").expect("valid id"),
///     Arc::new(InMemoryMessageStore::new()),
/// );
/// let proxy = factory.create_agent(AgentRole::Proxy, request).expect("proxy builds");
/// assert_eq!(proxy.implementation_name(), "ProxyAgent");
/// ```
#[derive(Debug, Clone)]
pub struct AgentFactory {
    capabilities: CapabilityFlags,
    catalog: AgentCatalog,
}

impl AgentFactory {
    /// Creates a factory over fixed capability flags.
    #[must_use]
    pub const fn new(capabilities: CapabilityFlags, catalog: AgentCatalog) -> Self {
        Self {
            capabilities,
            catalog,
        }
    }

    /// Returns the capability flags.
    #[must_use]
    pub const fn capabilities(&self) -> &CapabilityFlags {
        &self.capabilities
    }

    /// Builds an agent for a role.
    ///
    /// A researcher becomes the highest-priority enabled specialisation, or
    /// the general assistant when none is enabled or the selected kind fails
    /// to build.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::UnsupportedRole`] for analyst, coordinator and
    /// validator roles, and builder errors for the plain roles.
    pub fn create_agent(
        &self,
        role: AgentRole,
        request: AgentBuildRequest,
    ) -> FactoryResult<Arc<dyn Agent>> {
        match role {
            AgentRole::Assistant => self.build_kind(AgentKind::Assistant, request),
            AgentRole::CodeExecutor => self.build_kind(AgentKind::CodeExecutor, request),
            AgentRole::Proxy => self.build_kind(AgentKind::Proxy, request),
            AgentRole::Researcher => self.create_researcher(request),
            AgentRole::Analyst | AgentRole::Coordinator | AgentRole::Validator => {
                Err(FactoryError::UnsupportedRole(role))
            }
        }
    }

    /// Builds a specialised agent by type name.
    ///
    /// Accepts `knowledge_base`, `web_search`, `youtube_download`,
    /// `web_scraper`, `media_editor` and `moderator`. There is no fallback.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::CapabilityDisabled`] when the kind's capability
    /// is off, [`FactoryError::UnsupportedAgentType`] for any other name, and
    /// builder errors.
    pub fn create_specialized_agent(
        &self,
        type_name: &str,
        request: AgentBuildRequest,
    ) -> FactoryResult<Arc<dyn Agent>> {
        let kind = AgentKind::try_from(type_name)
            .ok()
            .filter(|kind| is_specialized(*kind))
            .ok_or_else(|| FactoryError::UnsupportedAgentType(type_name.to_owned()))?;
        self.build_kind(kind, request)
    }

    /// Returns the kind a researcher request would select, if any is enabled.
    #[must_use]
    pub fn researcher_kind(&self) -> Option<AgentKind> {
        RESEARCHER_PRIORITY
            .into_iter()
            .find(|kind| self.is_enabled(*kind))
    }

    /// Maps every kind to whether this factory can currently build it.
    #[must_use]
    pub fn available_agent_types(&self) -> BTreeMap<AgentKind, bool> {
        AgentKind::ALL
            .into_iter()
            .map(|kind| (kind, self.is_enabled(kind) && self.catalog.contains(kind)))
            .collect()
    }

    fn create_researcher(&self, request: AgentBuildRequest) -> FactoryResult<Arc<dyn Agent>> {
        let Some(kind) = self.researcher_kind() else {
            warn!("no researcher capability enabled, falling back to assistant");
            return self.build_kind(AgentKind::Assistant, request);
        };
        self.build_kind(kind, request.clone()).or_else(|err| {
            error!(
                kind = %kind,
                error = %err,
                "researcher construction failed, falling back to assistant"
            );
            self.build_kind(AgentKind::Assistant, request)
        })
    }

    fn is_enabled(&self, kind: AgentKind) -> bool {
        kind.required_capability()
            .is_none_or(|capability| self.capabilities.is_enabled(capability))
    }

    fn build_kind(
        &self,
        kind: AgentKind,
        request: AgentBuildRequest,
    ) -> FactoryResult<Arc<dyn Agent>> {
        if let Some(capability) = kind.required_capability() {
            if !self.capabilities.is_enabled(capability) {
                return Err(FactoryError::CapabilityDisabled { kind, capability });
            }
        }
        let builder = self
            .catalog
            .builder(kind)
            .ok_or(FactoryError::BuilderUnavailable(kind))?;
        let agent = builder.build(request)?;
        info!(
            kind = %kind,
            agent_id = %agent.id(),
            implementation = agent.implementation_name(),
            "agent created"
        );
        Ok(agent)
    }
}

const fn is_specialized(kind: AgentKind) -> bool {
    matches!(
        kind,
        AgentKind::KnowledgeBase
            | AgentKind::WebSearch
            | AgentKind::YoutubeDownload
            | AgentKind::WebScraper
            | AgentKind::MediaEditor
            | AgentKind::Moderator
    )
}
