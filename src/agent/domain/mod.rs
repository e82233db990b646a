//! Domain model for agents and their capabilities.
//!
//! Agents are identified by a validated [`AgentId`], play an [`AgentRole`],
//! are built as a concrete [`AgentKind`], and advertise [`Capability`] tags.
//! [`CapabilityFlags`] record which capabilities the deployment enables.

mod capability;
mod error;
mod ids;
mod kind;
mod role;

pub use capability::{Capability, CapabilityFlags};
pub use error::{AgentDomainError, ParseAgentKindError, ParseAgentRoleError, ParseCapabilityError};
pub use ids::AgentId;
pub use kind::AgentKind;
pub use role::AgentRole;
