//! Classifier that asks a language model for the intent label.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::agent::ports::{LlmRequest, LlmService};
use crate::routing::{
    domain::{ClassificationRequest, Intent, classify},
    ports::IntentClassifier,
};

/// Label the model returns when no intent applies.
const NO_INTENT_LABEL: &str = "none";

const SYSTEM_MESSAGE: &str = "You route user requests to specialised agents. \
Use the earlier conversation to resolve follow-up requests. \
Reply with exactly one label from the available list, or none, and nothing else.";

/// Classifies content with a language model.
///
/// The prompt lists the intents registered agents can serve and the recent
/// conversation. A label outside that list yields no intent, so the router
/// falls back to its assistant. The keyword rules are used when the model
/// call fails or the reply is not a known label.
#[derive(Clone)]
pub struct LlmIntentClassifier {
    llm: Arc<dyn LlmService>,
}

impl LlmIntentClassifier {
    /// Creates a classifier over a language model.
    #[must_use]
    pub const fn new(llm: Arc<dyn LlmService>) -> Self {
        Self { llm }
    }

    fn build_prompt(request: &ClassificationRequest<'_>) -> String {
        let labels: Vec<&str> = request.routable().iter().copied().map(Intent::as_str).collect();
        let mut prompt = format!("Available labels: {}, {NO_INTENT_LABEL}\n", labels.join(", "));
        if !request.history().is_empty() {
            prompt.push_str("\nConversation so far:\n");
            for turn in request.history() {
                prompt.push_str(&format!("{}: {}\n", turn.sender_id(), turn.content()));
            }
        }
        prompt.push_str("\nRequest:\n");
        prompt.push_str(request.content());
        prompt
    }
}

#[async_trait]
impl IntentClassifier for LlmIntentClassifier {
    fn name(&self) -> &str {
        "llm"
    }

    async fn classify(&self, request: &ClassificationRequest<'_>) -> Option<Intent> {
        if request.routable().is_empty() {
            debug!("no routable intents, skipping llm classification");
            return None;
        }

        let llm_request =
            LlmRequest::new(Self::build_prompt(request)).with_system_message(SYSTEM_MESSAGE);
        let reply = match self.llm.generate(&llm_request).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "intent classification via llm failed, using keyword rules");
                return classify(request.content());
            }
        };

        let label = reply
            .trim()
            .trim_matches(|c: char| c == '"' || c == '\'' || c == '.');
        if label.eq_ignore_ascii_case(NO_INTENT_LABEL) {
            return None;
        }
        match Intent::try_from(label) {
            Ok(intent) if request.is_routable(intent) => {
                debug!(intent = %intent, "llm classified intent");
                Some(intent)
            }
            Ok(intent) => {
                warn!(intent = %intent, "llm chose an intent no registered agent serves");
                None
            }
            Err(err) => {
                warn!(error = %err, "llm returned an unknown intent label, using keyword rules");
                classify(request.content())
            }
        }
    }
}
