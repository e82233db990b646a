//! The message envelope exchanged between callers, routers and agents.

use super::{
    ConversationId, MessageId, MessageMetadata, MessageType, ParticipantId, RoutingMetadata,
    SessionId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One turn of conversation input or output.
///
/// Messages are immutable after construction. The single exception is the
/// routing block in the metadata, which a router fills in on the response it
/// returns (see [`Message::annotate_routing`]).
///
/// # Examples
///
/// ```
/// use ambivo_agents::message::domain::{Message, MessageType, ParticipantId};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let message = Message::builder(ParticipantId::new("user_1"), "hello")
///     .to(ParticipantId::new("proxy"))
///     .build(&clock);
///
/// assert_eq!(message.message_type(), MessageType::UserInput);
/// assert_eq!(message.content(), "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    sender_id: ParticipantId,
    recipient_id: Option<ParticipantId>,
    content: String,
    message_type: MessageType,
    metadata: MessageMetadata,
    created_at: DateTime<Utc>,
    session_id: Option<SessionId>,
    conversation_id: Option<ConversationId>,
}

impl Message {
    /// Returns a builder for a message from `sender` with the given content.
    ///
    /// The message type defaults to [`MessageType::UserInput`].
    #[must_use]
    pub fn builder(sender_id: ParticipantId, content: impl Into<String>) -> MessageBuilder {
        MessageBuilder::new(sender_id, content)
    }

    /// Creates a response to this message.
    ///
    /// The response is addressed to this message's sender and inherits its
    /// session and conversation identifiers.
    #[must_use]
    pub fn reply(
        &self,
        sender_id: ParticipantId,
        content: impl Into<String>,
        message_type: MessageType,
        clock: &(impl Clock + ?Sized),
    ) -> Self {
        let mut builder = MessageBuilder::new(sender_id, content)
            .to(self.sender_id.clone())
            .with_type(message_type);
        builder.session_id = self.session_id;
        builder.conversation_id = self.conversation_id;
        builder.build(clock)
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the sender identifier.
    #[must_use]
    pub const fn sender_id(&self) -> &ParticipantId {
        &self.sender_id
    }

    /// Returns the recipient identifier, if addressed.
    #[must_use]
    pub const fn recipient_id(&self) -> Option<&ParticipantId> {
        self.recipient_id.as_ref()
    }

    /// Returns the textual content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the message type.
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// Returns the metadata.
    #[must_use]
    pub const fn metadata(&self) -> &MessageMetadata {
        &self.metadata
    }

    /// Returns the routing block, if a router produced this message.
    #[must_use]
    pub const fn routing(&self) -> Option<&RoutingMetadata> {
        self.metadata.routing.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the session identifier, if any.
    #[must_use]
    pub const fn session_id(&self) -> Option<SessionId> {
        self.session_id
    }

    /// Returns the conversation identifier, if any.
    #[must_use]
    pub const fn conversation_id(&self) -> Option<ConversationId> {
        self.conversation_id
    }

    /// Records which router forwarded this message and why.
    ///
    /// A later annotation replaces an earlier one, so nested routers leave
    /// the outermost decision on the final response.
    pub fn annotate_routing(&mut self, routing: RoutingMetadata) {
        self.metadata.routing = Some(routing);
    }
}

/// Builder for [`Message`].
#[derive(Debug)]
pub struct MessageBuilder {
    id: Option<MessageId>,
    sender_id: ParticipantId,
    recipient_id: Option<ParticipantId>,
    content: String,
    message_type: MessageType,
    metadata: MessageMetadata,
    session_id: Option<SessionId>,
    conversation_id: Option<ConversationId>,
}

impl MessageBuilder {
    /// Creates a builder for a user-input message.
    #[must_use]
    pub fn new(sender_id: ParticipantId, content: impl Into<String>) -> Self {
        Self {
            id: None,
            sender_id,
            recipient_id: None,
            content: content.into(),
            message_type: MessageType::UserInput,
            metadata: MessageMetadata::empty(),
            session_id: None,
            conversation_id: None,
        }
    }

    /// Sets a specific message ID.
    #[must_use]
    pub const fn with_id(mut self, id: MessageId) -> Self {
        self.id = Some(id);
        self
    }

    /// Addresses the message to a recipient.
    #[must_use]
    pub fn to(mut self, recipient_id: ParticipantId) -> Self {
        self.recipient_id = Some(recipient_id);
        self
    }

    /// Sets the message type.
    #[must_use]
    pub const fn with_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    /// Sets the metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: MessageMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Places the message in a session.
    #[must_use]
    pub const fn in_session(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Places the message in a conversation.
    #[must_use]
    pub const fn in_conversation(mut self, conversation_id: ConversationId) -> Self {
        self.conversation_id = Some(conversation_id);
        self
    }

    /// Builds the message, stamping it with the clock's current time.
    #[must_use]
    pub fn build(self, clock: &(impl Clock + ?Sized)) -> Message {
        Message {
            id: self.id.unwrap_or_default(),
            sender_id: self.sender_id,
            recipient_id: self.recipient_id,
            content: self.content,
            message_type: self.message_type,
            metadata: self.metadata,
            created_at: clock.utc(),
            session_id: self.session_id,
            conversation_id: self.conversation_id,
        }
    }
}
