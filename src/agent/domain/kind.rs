//! Agent implementation kinds known to the factory.

use super::{AgentRole, Capability, ParseAgentKindError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Concrete agent implementation the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// General conversational assistant.
    Assistant,
    /// Sandboxed code executor.
    CodeExecutor,
    /// Keyword router.
    Proxy,
    /// Knowledge-base ingestion and query agent.
    KnowledgeBase,
    /// Web search agent.
    WebSearch,
    /// Video and audio download agent.
    YoutubeDownload,
    /// Web scraping agent.
    WebScraper,
    /// Media editing agent.
    MediaEditor,
    /// Conversation moderator.
    Moderator,
}

impl AgentKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Assistant,
        Self::CodeExecutor,
        Self::Proxy,
        Self::KnowledgeBase,
        Self::WebSearch,
        Self::YoutubeDownload,
        Self::WebScraper,
        Self::MediaEditor,
        Self::Moderator,
    ];

    /// Returns the type name accepted by
    /// [`AgentFactory::create_specialized_agent`](crate::agent::services::AgentFactory::create_specialized_agent).
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Assistant => "assistant",
            Self::CodeExecutor => "code_executor",
            Self::Proxy => "proxy",
            Self::KnowledgeBase => "knowledge_base",
            Self::WebSearch => "web_search",
            Self::YoutubeDownload => "youtube_download",
            Self::WebScraper => "web_scraper",
            Self::MediaEditor => "media_editor",
            Self::Moderator => "moderator",
        }
    }

    /// Returns the implementation name reported in routing metadata.
    #[must_use]
    pub const fn implementation_name(self) -> &'static str {
        match self {
            Self::Assistant => "AssistantAgent",
            Self::CodeExecutor => "CodeExecutorAgent",
            Self::Proxy => "ProxyAgent",
            Self::KnowledgeBase => "KnowledgeBaseAgent",
            Self::WebSearch => "WebSearchAgent",
            Self::YoutubeDownload => "YouTubeDownloadAgent",
            Self::WebScraper => "WebScraperAgent",
            Self::MediaEditor => "MediaEditorAgent",
            Self::Moderator => "ModeratorAgent",
        }
    }

    /// Returns the capability that must be enabled before this kind may be
    /// built, if any.
    #[must_use]
    pub const fn required_capability(self) -> Option<Capability> {
        match self {
            Self::KnowledgeBase => Some(Capability::KnowledgeBase),
            Self::WebSearch => Some(Capability::WebSearch),
            Self::YoutubeDownload => Some(Capability::YoutubeDownload),
            Self::WebScraper => Some(Capability::WebScraping),
            Self::MediaEditor => Some(Capability::MediaEditor),
            Self::Assistant | Self::CodeExecutor | Self::Proxy | Self::Moderator => None,
        }
    }

    /// Returns the routing tags an agent of this kind carries by default.
    ///
    /// Code executors carry none; the router finds them by role.
    #[must_use]
    pub fn default_capabilities(self) -> Vec<Capability> {
        self.required_capability().into_iter().collect()
    }

    /// Returns the role an agent of this kind plays.
    #[must_use]
    pub const fn role(self) -> AgentRole {
        match self {
            Self::Assistant => AgentRole::Assistant,
            Self::CodeExecutor => AgentRole::CodeExecutor,
            Self::Proxy => AgentRole::Proxy,
            Self::Moderator => AgentRole::Coordinator,
            Self::KnowledgeBase
            | Self::WebSearch
            | Self::YoutubeDownload
            | Self::WebScraper
            | Self::MediaEditor => AgentRole::Researcher,
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl TryFrom<&str> for AgentKind {
    type Error = ParseAgentKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.type_name() == normalized)
            .ok_or_else(|| ParseAgentKindError(value.to_owned()))
    }
}
