//! Message envelope and history storage.
//!
//! Every agent, including routers, consumes and produces [`domain::Message`]
//! values. The module follows hexagonal architecture principles:
//!
//! - **Domain**: envelope types ([`domain::Message`], [`domain::MessageType`],
//!   [`domain::MessageMetadata`], [`domain::ExecutionContext`])
//! - **Ports**: the [`ports::MessageStore`] history contract
//! - **Adapters**: [`adapters::memory::InMemoryMessageStore`]
//!
//! # Example
//!
//! ```
//! use ambivo_agents::message::domain::{Message, MessageType, ParticipantId};
//! use mockable::DefaultClock;
//!
//! let clock = DefaultClock;
//! let request = Message::builder(ParticipantId::new("user_1"), "hi").build(&clock);
//! let reply = request.reply(ParticipantId::new("as1"), "hello", MessageType::AgentResponse, &clock);
//!
//! assert_eq!(reply.recipient_id(), Some(&ParticipantId::new("user_1")));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;

#[cfg(test)]
mod tests;
