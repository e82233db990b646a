//! Error types for message storage.
//!
//! Uses `thiserror` for typed variants that callers can inspect.

use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while storing or reading message history.
#[derive(Debug, Clone, Error)]
pub enum MessageStoreError {
    /// The store's internal lock was poisoned by a panicking writer.
    #[error("message store lock poisoned: {0}")]
    Poisoned(String),

    /// The storage backend failed.
    #[error("message store backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageStoreError {
    /// Wraps a backend error.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }

    /// Creates a poisoned-lock error from the lock's error text.
    #[must_use]
    pub fn poisoned(message: impl Into<String>) -> Self {
        Self::Poisoned(message.into())
    }
}
