//! The outcome of choosing an agent for a message.

use super::Intent;
use crate::agent::domain::AgentId;
use crate::message::domain::RoutingMetadata;

/// Which agent a router picked and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision {
    /// Chosen agent.
    pub agent_id: AgentId,
    /// Implementation name of the chosen agent.
    pub implementation_name: String,
    /// Intent that drove the choice; `None` when the default assistant was
    /// picked because nothing matched.
    pub intent: Option<Intent>,
    /// One-line justification.
    pub reason: String,
}

impl RoutingDecision {
    /// Records a choice driven by a matched intent.
    #[must_use]
    pub fn matched(
        agent_id: AgentId,
        implementation_name: impl Into<String>,
        intent: Intent,
    ) -> Self {
        let name = implementation_name.into();
        let reason = format!("Content matched {name} patterns ({intent})");
        Self {
            agent_id,
            implementation_name: name,
            intent: Some(intent),
            reason,
        }
    }

    /// Records a fall back to the default assistant.
    ///
    /// `intent` is the intent that matched but had no capable agent, if any.
    #[must_use]
    pub fn defaulted(
        agent_id: AgentId,
        implementation_name: impl Into<String>,
        intent: Option<Intent>,
    ) -> Self {
        let name = implementation_name.into();
        let reason = intent.map_or_else(
            || format!("No routing rule matched; defaulted to {name}"),
            |unserved| format!("No agent registered for {unserved}; defaulted to {name}"),
        );
        Self {
            agent_id,
            implementation_name: name,
            intent,
            reason,
        }
    }

    /// Converts the decision into the metadata block stamped on responses.
    #[must_use]
    pub fn to_metadata(&self, routed_by: &str) -> RoutingMetadata {
        RoutingMetadata {
            routed_by: routed_by.to_owned(),
            routed_to: self.agent_id.as_str().to_owned(),
            routed_to_class: self.implementation_name.clone(),
            routing_reason: self.reason.clone(),
        }
    }
}
