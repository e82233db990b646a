//! Keyword rules for intent classification.
//!
//! Rules are checked in [`Intent::ALL`] order against the lower-cased
//! content; the first rule with a matching substring wins. Matching is plain
//! substring search, so `kb` also matches inside longer words.

use super::Intent;

const MEDIA_DOWNLOAD: &[&str] = &[
    "youtube.com",
    "youtu.be",
    "download youtube",
    "youtube download",
    "download video",
    "download audio",
    "youtube mp3",
    "youtube mp4",
    "download from youtube",
    "youtube",
];

const WEB_SEARCH: &[&str] = &[
    "search web",
    "web search",
    "find online",
    "search_web",
    "brave search",
    "aves search",
    "search the web",
    "search for",
];

const KNOWLEDGE_BASE: &[&str] = &[
    "ingest_document",
    "ingest_text",
    "ingest",
    "knowledge base",
    "kb",
    "query_knowledge_base",
    "query",
    "search documents",
    "vector database",
    "qdrant",
    "semantic search",
    "document",
    "pdf",
    "docx",
];

const MEDIA_PROCESSING: &[&str] = &[
    "extract_audio",
    "convert_video",
    "media",
    "ffmpeg",
    "audio",
    "video",
    "mp4",
    "mp3",
    "wav",
    "extract audio",
    "resize video",
    "trim video",
    "video format",
    "audio format",
];

const CODE_EXECUTION: &[&str] = &[
    "execute",
    "run code",
    "python",
    "bash",
    "```python",
    "```bash",
    "script",
    "code execution",
];

const WEB_SCRAPING: &[&str] = &[
    "scrape",
    "web scraping",
    "crawl",
    "extract from url",
    "scrape_url",
    "apartments.com",
    "scrape website",
];

/// Returns the keywords that trigger an intent.
#[must_use]
pub const fn keywords(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::MediaDownload => MEDIA_DOWNLOAD,
        Intent::WebSearch => WEB_SEARCH,
        Intent::KnowledgeBase => KNOWLEDGE_BASE,
        Intent::MediaProcessing => MEDIA_PROCESSING,
        Intent::CodeExecution => CODE_EXECUTION,
        Intent::WebScraping => WEB_SCRAPING,
    }
}

/// Classifies message content by keyword.
///
/// Pure and deterministic: the same content always yields the same intent.
///
/// # Examples
///
/// ```
/// use ambivo_agents::routing::domain::{Intent, classify};
///
/// assert_eq!(
///     classify("search for https://youtube.com/watch?v=abc"),
///     Some(Intent::MediaDownload),
/// );
/// assert_eq!(classify("hello there"), None);
/// ```
#[must_use]
pub fn classify(content: &str) -> Option<Intent> {
    let lowered = content.to_lowercase();
    Intent::ALL.into_iter().find(|intent| {
        keywords(*intent)
            .iter()
            .any(|keyword| lowered.contains(keyword))
    })
}
