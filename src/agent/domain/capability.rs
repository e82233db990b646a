//! Capabilities and the configuration-derived capability flags.

use super::ParseCapabilityError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Prefix accepted in front of capability keys (`enable_web_search`).
const ENABLE_PREFIX: &str = "enable_";

/// A specialised capability an agent can provide.
///
/// Capabilities double as routing tags on registry entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Document ingestion and semantic retrieval.
    KnowledgeBase,
    /// Web search through an external provider.
    WebSearch,
    /// Video and audio download from hosting sites.
    YoutubeDownload,
    /// Web page scraping and crawling.
    WebScraping,
    /// Audio and video editing.
    MediaEditor,
    /// Sandboxed code execution.
    ///
    /// Accepted as a configuration key and reported by
    /// [`CapabilityFlags::enabled`], but it gates no agent kind and is never
    /// a routing tag: code executors are plain-role agents routed by role.
    CodeExecution,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::KnowledgeBase,
        Self::WebSearch,
        Self::YoutubeDownload,
        Self::WebScraping,
        Self::MediaEditor,
        Self::CodeExecution,
    ];

    /// Returns the configuration key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KnowledgeBase => "knowledge_base",
            Self::WebSearch => "web_search",
            Self::YoutubeDownload => "youtube_download",
            Self::WebScraping => "web_scraping",
            Self::MediaEditor => "media_editor",
            Self::CodeExecution => "code_execution",
        }
    }

    /// Returns a human-readable label used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::KnowledgeBase => "Knowledge base",
            Self::WebSearch => "Web search",
            Self::YoutubeDownload => "YouTube download",
            Self::WebScraping => "Web scraping",
            Self::MediaEditor => "Media editor",
            Self::CodeExecution => "Code execution",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Capability {
    type Error = ParseCapabilityError;

    /// Parses a configuration key, with or without the `enable_` prefix.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        let key = normalized
            .strip_prefix(ENABLE_PREFIX)
            .unwrap_or(normalized.as_str());
        Self::ALL
            .into_iter()
            .find(|capability| capability.as_str() == key)
            .ok_or_else(|| ParseCapabilityError(value.to_owned()))
    }
}

/// Which capabilities the deployment has enabled.
///
/// Derived once from configuration. A capability that was never mentioned is
/// disabled.
///
/// # Examples
///
/// ```
/// use ambivo_agents::agent::domain::{Capability, CapabilityFlags};
///
/// let flags = CapabilityFlags::from_mapping([("web_search", true), ("enable_media_editor", true)]);
/// assert!(flags.is_enabled(Capability::WebSearch));
/// assert!(flags.is_enabled(Capability::MediaEditor));
/// assert!(!flags.is_enabled(Capability::KnowledgeBase));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityFlags(BTreeMap<Capability, bool>);

impl CapabilityFlags {
    /// Creates flags with every capability disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds flags from a raw `name -> enabled` mapping.
    ///
    /// Unrecognised keys are ignored. When a capability appears under both
    /// its plain and `enable_` prefixed key, the last entry wins.
    #[must_use]
    pub fn from_mapping<I, K>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let mut flags = Self::new();
        for (key, enabled) in mapping {
            match Capability::try_from(key.as_ref()) {
                Ok(capability) => {
                    flags.0.insert(capability, enabled);
                }
                Err(err) => debug!(key = key.as_ref(), error = %err, "ignoring capability key"),
            }
        }
        flags
    }

    /// Sets a capability flag.
    #[must_use]
    pub fn with(mut self, capability: Capability, enabled: bool) -> Self {
        self.0.insert(capability, enabled);
        self
    }

    /// Returns whether a capability is enabled.
    #[must_use]
    pub fn is_enabled(&self, capability: Capability) -> bool {
        self.0.get(&capability).copied().unwrap_or(false)
    }

    /// Returns the enabled capabilities in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(capability, _)| *capability)
    }
}
