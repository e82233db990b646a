//! Port for language-model text generation.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// A single text-generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmRequest {
    /// User prompt.
    pub prompt: String,
    /// Optional system instruction.
    pub system_message: Option<String>,
}

impl LlmRequest {
    /// Creates a request with no system instruction.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_message: None,
        }
    }

    /// Sets the system instruction.
    #[must_use]
    pub fn with_system_message(mut self, system_message: impl Into<String>) -> Self {
        self.system_message = Some(system_message.into());
        self
    }
}

/// Language-model backend.
#[async_trait]
pub trait LlmService: Send + Sync {
    /// Generates a completion for the request.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] when no provider is available or the provider
    /// rejects the request.
    async fn generate(&self, request: &LlmRequest) -> Result<String, LlmError>;
}

/// Errors returned by language-model backends.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    /// No provider is configured or every provider is cooling down.
    #[error("no LLM provider available")]
    Unavailable,

    /// The provider returned an error.
    #[error("provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl LlmError {
    /// Wraps a provider error.
    #[must_use]
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
