//! Input handed to intent classifiers.

use super::Intent;
use crate::message::domain::Message;

/// What a classifier sees when asked to label a message.
///
/// `routable` lists the intents some registered agent can serve, in
/// priority order. `history` holds earlier turns of the conversation, oldest
/// first, so follow-ups such as "do that again" can be resolved.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRequest<'a> {
    content: &'a str,
    routable: &'a [Intent],
    history: &'a [Message],
}

impl<'a> ClassificationRequest<'a> {
    /// Creates a request for content with no registry or history context.
    ///
    /// Every intent is considered routable.
    #[must_use]
    pub const fn new(content: &'a str) -> Self {
        Self {
            content,
            routable: &Intent::ALL,
            history: &[],
        }
    }

    /// Restricts the intents a classifier may return.
    #[must_use]
    pub const fn with_routable(mut self, routable: &'a [Intent]) -> Self {
        self.routable = routable;
        self
    }

    /// Attaches earlier turns of the conversation.
    #[must_use]
    pub const fn with_history(mut self, history: &'a [Message]) -> Self {
        self.history = history;
        self
    }

    /// Returns the content to classify.
    #[must_use]
    pub const fn content(&self) -> &'a str {
        self.content
    }

    /// Returns the intents some registered agent can serve.
    #[must_use]
    pub const fn routable(&self) -> &'a [Intent] {
        self.routable
    }

    /// Returns earlier turns of the conversation.
    #[must_use]
    pub const fn history(&self) -> &'a [Message] {
        self.history
    }

    /// Returns `true` when a registered agent can serve the intent.
    #[must_use]
    pub fn is_routable(&self, intent: Intent) -> bool {
        self.routable.contains(&intent)
    }
}
