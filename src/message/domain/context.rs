//! Execution context passed alongside a message.

use super::{ConversationId, SessionId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

const DEFAULT_TENANT: &str = "default";

/// Caller-supplied context for processing a message.
///
/// Routers forward the context to the chosen agent untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionContext {
    /// Session the request belongs to.
    pub session_id: SessionId,
    /// Conversation the request belongs to.
    pub conversation_id: ConversationId,
    /// End user on whose behalf the request runs.
    pub user_id: String,
    /// Tenant owning the request.
    pub tenant_id: String,
    /// Free-form context data.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, Value>,
}

impl ExecutionContext {
    /// Creates a context for a user in the default tenant.
    #[must_use]
    pub fn new(
        session_id: SessionId,
        conversation_id: ConversationId,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            session_id,
            conversation_id,
            user_id: user_id.into(),
            tenant_id: DEFAULT_TENANT.to_owned(),
            metadata: HashMap::new(),
        }
    }

    /// Sets the tenant.
    #[must_use]
    pub fn with_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = tenant_id.into();
        self
    }

    /// Adds a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}
