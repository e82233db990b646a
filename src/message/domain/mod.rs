//! Domain types for the message envelope.
//!
//! This module contains pure domain types with no infrastructure dependencies.
//! All types are serialisable via serde.

mod context;
mod ids;
mod message;
mod message_type;
mod metadata;
mod participant;

pub use context::ExecutionContext;
pub use ids::{ConversationId, MessageId, SessionId};
pub use message::{Message, MessageBuilder};
pub use message_type::{MessageType, ParseMessageTypeError};
pub use metadata::{MessageMetadata, RoutingMetadata};
pub use participant::ParticipantId;
