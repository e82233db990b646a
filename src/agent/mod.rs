//! Agent contract, capabilities and the capability-gated agent factory.
//!
//! - **Domain**: identifiers, roles, kinds and [`domain::CapabilityFlags`]
//! - **Ports**: the [`ports::Agent`] processing contract and the
//!   [`ports::LlmService`] text-generation backend
//! - **Adapters**: the built-in [`adapters::AssistantAgent`]
//! - **Services**: [`services::AgentFactory`] and its builder catalog
//!
//! # Example
//!
//! ```
//! use ambivo_agents::agent::domain::{AgentKind, Capability, CapabilityFlags};
//! use ambivo_agents::agent::services::{AgentCatalog, AgentFactory};
//!
//! let flags = CapabilityFlags::new().with(Capability::WebSearch, true);
//! let factory = AgentFactory::new(flags, AgentCatalog::with_builtin());
//!
//! assert_eq!(factory.researcher_kind(), Some(AgentKind::WebSearch));
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
