//! Application services for routing: the agent registry and the router.

mod registry;
mod router;

pub use registry::{AgentRegistry, RegisteredAgent, RegistryError, RegistryResult};
pub use router::{AgentStatus, DispatchError, DispatchOutcome, Router, RouterStatus};
