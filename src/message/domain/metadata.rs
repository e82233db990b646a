//! Message metadata, including the routing block written by the router.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Metadata associated with a message.
///
/// # Examples
///
/// ```
/// use ambivo_agents::message::domain::MessageMetadata;
/// use serde_json::json;
///
/// let metadata = MessageMetadata::empty().with_extension("chat_interface", json!(true));
/// assert_eq!(metadata.extension("chat_interface"), Some(&json!(true)));
/// assert!(metadata.routing.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageMetadata {
    /// Routing details, present when the message was produced via a router.
    ///
    /// Serialised flat: `routed_by`, `routed_to`, `routed_to_class` and
    /// `routing_reason` sit directly in the metadata object.
    #[serde(flatten)]
    pub routing: Option<RoutingMetadata>,

    /// Free-form extension data supplied by callers and agents.
    ///
    /// Flattened on serialisation, so keys must not collide with the routing
    /// field names.
    #[serde(flatten, skip_serializing_if = "HashMap::is_empty")]
    pub extensions: HashMap<String, Value>,
}

impl MessageMetadata {
    /// Creates empty metadata.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds an extension field.
    #[must_use]
    pub fn with_extension(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    /// Returns an extension value by key.
    #[must_use]
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    /// Returns `true` when neither routing data nor extensions are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routing.is_none() && self.extensions.is_empty()
    }
}

/// Annotation added by a router to the response it forwards back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingMetadata {
    /// Identifier of the router that made the decision.
    pub routed_by: String,
    /// Identifier of the agent that handled the message.
    pub routed_to: String,
    /// Implementation name of the agent that handled the message.
    pub routed_to_class: String,
    /// One-line human-readable justification for the choice.
    pub routing_reason: String,
}
