//! Keyword-rule classifier.

use async_trait::async_trait;

use crate::routing::{
    domain::{ClassificationRequest, Intent, classify},
    ports::IntentClassifier,
};

/// Classifies content with the fixed keyword rules.
///
/// Conversation history and the routable set are ignored; the router falls
/// back to the assistant when no agent serves the matched intent.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Creates the classifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl IntentClassifier for KeywordClassifier {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn classify(&self, request: &ClassificationRequest<'_>) -> Option<Intent> {
        classify(request.content())
    }
}
