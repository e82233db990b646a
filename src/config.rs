//! TOML configuration for capabilities, the router and logging.
//!
//! ```toml
//! [capabilities]
//! knowledge_base = true
//! enable_web_search = true
//!
//! [router]
//! agent_id = "proxy"
//! classifier = "keyword"
//! history_limit = 10
//!
//! [logging]
//! filter = "info"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::agent::{
    domain::{AgentDomainError, AgentId, CapabilityFlags},
    ports::LlmService,
    services::{
        AgentBuildRequest, AgentCatalog, AgentFactory, CLASSIFIER_OPTION, HISTORY_LIMIT_OPTION,
    },
};
use crate::message::ports::MessageStore;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read configuration file {}: {source}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The content is not valid configuration TOML.
    #[error("invalid configuration: {0}")]
    Parse(Box<toml::de::Error>),
    /// The configured router identifier is invalid.
    #[error("invalid router agent_id: {0}")]
    RouterId(#[from] AgentDomainError),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(Box::new(err))
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Raw capability switches. Keys may carry the `enable_` prefix; unknown
    /// keys are ignored.
    pub capabilities: BTreeMap<String, bool>,
    /// Router settings.
    pub router: RouterConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Intent classifier selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKind {
    /// Keyword rules.
    #[default]
    Keyword,
    /// Language-model labelling with keyword fallback.
    Llm,
}

impl ClassifierKind {
    /// Returns the option value understood by the proxy builder.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Llm => "llm",
        }
    }
}

/// Router settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Identifier of the router agent.
    pub agent_id: String,
    /// Intent classifier.
    pub classifier: ClassifierKind,
    /// Default window for history reads.
    pub history_limit: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            agent_id: "proxy".to_owned(),
            classifier: ClassifierKind::Keyword,
            history_limit: 10,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` takes
    /// precedence.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let content = std::fs::read_to_string(file).map_err(|source| ConfigError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid
    /// configuration.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Derives the capability flags.
    #[must_use]
    pub fn capability_flags(&self) -> CapabilityFlags {
        CapabilityFlags::from_mapping(
            self.capabilities
                .iter()
                .map(|(key, enabled)| (key.as_str(), *enabled)),
        )
    }

    /// Creates a factory gated by the configured capabilities.
    #[must_use]
    pub fn agent_factory(&self, catalog: AgentCatalog) -> AgentFactory {
        AgentFactory::new(self.capability_flags(), catalog)
    }

    /// Creates the build request for the configured router.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RouterId`] when the configured identifier is
    /// invalid.
    pub fn router_request(
        &self,
        memory: Arc<dyn MessageStore>,
        llm: Option<Arc<dyn LlmService>>,
    ) -> Result<AgentBuildRequest, ConfigError> {
        let agent_id = AgentId::new(self.router.agent_id.as_str())?;
        let mut request = AgentBuildRequest::new(agent_id, memory)
            .with_option(CLASSIFIER_OPTION, Value::from(self.router.classifier.as_str()))
            .with_option(HISTORY_LIMIT_OPTION, Value::from(self.router.history_limit));
        request.llm = llm;
        Ok(request)
    }
}
