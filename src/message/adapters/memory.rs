//! In-memory implementation of the `MessageStore` port.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::message::{
    domain::{ConversationId, Message},
    error::MessageStoreError,
    ports::store::{MessageStore, MessageStoreResult},
};

/// Thread-safe in-memory message history.
///
/// Cloning the store shares the underlying history, so a router and the
/// agents it owns can observe the same conversation. A message whose id is
/// already recorded is stored once.
///
/// History is unbounded unless a retention cap is set with
/// [`InMemoryMessageStore::with_retention`]; otherwise long-running callers
/// must call [`MessageStore::clear`] themselves.
///
/// # Example
///
/// ```
/// use ambivo_agents::message::adapters::memory::InMemoryMessageStore;
///
/// let store = InMemoryMessageStore::new();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryMessageStore {
    conversations: Arc<RwLock<HashMap<Option<ConversationId>, Vec<Message>>>>,
    retention: Option<usize>,
}

impl InMemoryMessageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `limit` messages per conversation, dropping the oldest.
    ///
    /// A limit of zero is treated as one.
    #[must_use]
    pub fn with_retention(mut self, limit: usize) -> Self {
        self.retention = Some(limit.max(1));
        self
    }

    /// Returns the per-conversation retention cap, if any.
    #[must_use]
    pub const fn retention(&self) -> Option<usize> {
        self.retention
    }

    /// Returns the number of stored messages across all conversations.
    ///
    /// Returns `0` if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conversations
            .read()
            .map(|guard| guard.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Returns `true` if no messages are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn store(&self, message: &Message) -> MessageStoreResult<()> {
        let mut guard = self
            .conversations
            .write()
            .map_err(|err| MessageStoreError::poisoned(err.to_string()))?;
        let history = guard.entry(message.conversation_id()).or_default();
        if history.iter().any(|stored| stored.id() == message.id()) {
            return Ok(());
        }
        history.push(message.clone());
        if self.retention.is_some_and(|limit| history.len() > limit) {
            history.remove(0);
        }
        Ok(())
    }

    async fn recent_messages(
        &self,
        conversation_id: Option<ConversationId>,
        limit: usize,
    ) -> MessageStoreResult<Vec<Message>> {
        let guard = self
            .conversations
            .read()
            .map_err(|err| MessageStoreError::poisoned(err.to_string()))?;
        let history = guard.get(&conversation_id).map_or_else(Vec::new, |messages| {
            let skip = messages.len().saturating_sub(limit);
            messages.iter().skip(skip).cloned().collect()
        });
        Ok(history)
    }

    async fn clear(&self, conversation_id: Option<ConversationId>) -> MessageStoreResult<()> {
        let mut guard = self
            .conversations
            .write()
            .map_err(|err| MessageStoreError::poisoned(err.to_string()))?;
        guard.remove(&conversation_id);
        Ok(())
    }
}
