//! Store port for message history.
//!
//! Routers record every inbound message here before dispatching it, and
//! agents may use the same store as conversation memory.

use crate::message::{
    domain::{ConversationId, Message},
    error::MessageStoreError,
};
use async_trait::async_trait;

/// Result type for message store operations.
pub type MessageStoreResult<T> = Result<T, MessageStoreError>;

/// Port for message history persistence.
///
/// Messages without a conversation identifier are kept in a single
/// unscoped history addressed with `None`.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Appends a message to its conversation history.
    ///
    /// Storing a message whose id is already recorded in the conversation
    /// leaves the history unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError`] when the backend rejects the write.
    async fn store(&self, message: &Message) -> MessageStoreResult<()>;

    /// Returns up to `limit` most recent messages of a conversation, oldest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError`] when the backend read fails.
    async fn recent_messages(
        &self,
        conversation_id: Option<ConversationId>,
        limit: usize,
    ) -> MessageStoreResult<Vec<Message>>;

    /// Removes the history of a conversation.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError`] when the backend rejects the delete.
    async fn clear(&self, conversation_id: Option<ConversationId>) -> MessageStoreResult<()>;
}
