//! Routing intents and the registry targets that serve them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ParseIntentError;
use crate::agent::domain::{AgentRole, Capability};

/// What a message is asking for, as far as routing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Download video or audio from a hosting site.
    MediaDownload,
    /// Search the web.
    WebSearch,
    /// Ingest into or query a knowledge base.
    KnowledgeBase,
    /// Convert, trim or otherwise edit media.
    MediaProcessing,
    /// Run code.
    CodeExecution,
    /// Scrape or crawl web pages.
    WebScraping,
}

impl Intent {
    /// Every intent, in classification priority order.
    pub const ALL: [Self; 6] = [
        Self::MediaDownload,
        Self::WebSearch,
        Self::KnowledgeBase,
        Self::MediaProcessing,
        Self::CodeExecution,
        Self::WebScraping,
    ];

    /// Returns the stable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MediaDownload => "media_download",
            Self::WebSearch => "web_search",
            Self::KnowledgeBase => "knowledge_base",
            Self::MediaProcessing => "media_processing",
            Self::CodeExecution => "code_execution",
            Self::WebScraping => "web_scraping",
        }
    }

    /// Returns the registry target able to serve this intent.
    #[must_use]
    pub const fn target(self) -> RouteTarget {
        match self {
            Self::MediaDownload => RouteTarget::Capability(Capability::YoutubeDownload),
            Self::WebSearch => RouteTarget::Capability(Capability::WebSearch),
            Self::KnowledgeBase => RouteTarget::Capability(Capability::KnowledgeBase),
            Self::MediaProcessing => RouteTarget::Capability(Capability::MediaEditor),
            Self::CodeExecution => RouteTarget::Role(AgentRole::CodeExecutor),
            Self::WebScraping => RouteTarget::Capability(Capability::WebScraping),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Intent {
    type Error = ParseIntentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|intent| intent.as_str() == normalized)
            .ok_or_else(|| ParseIntentError(value.to_owned()))
    }
}

/// How the registry recognises an agent able to serve an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteTarget {
    /// An agent tagged with this capability.
    Capability(Capability),
    /// An agent playing this role.
    Role(AgentRole),
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capability(capability) => write!(f, "capability '{capability}'"),
            Self::Role(role) => write!(f, "role '{role}'"),
        }
    }
}
