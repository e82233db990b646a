//! Port for intent classification.

use async_trait::async_trait;

use crate::routing::domain::{ClassificationRequest, Intent};

/// Decides which intent, if any, a message expresses.
///
/// Classifiers never fail: implementations that depend on an external
/// service fall back to keyword rules when it is unavailable.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Returns a short name identifying the classifier in status reports.
    fn name(&self) -> &str;

    /// Classifies the request's content.
    ///
    /// Implementations may use the routable intents and conversation history
    /// the request carries, or ignore them.
    async fn classify(&self, request: &ClassificationRequest<'_>) -> Option<Intent>;
}
