//! In-memory integration tests for capability-gated agent construction.

use std::sync::Arc;

use ambivo_agents::{
    agent::{
        domain::{AgentKind, AgentRole, Capability, CapabilityFlags},
        services::{AgentCatalog, AgentFactory, FactoryError},
    },
    config::AppConfig,
    message::adapters::memory::InMemoryMessageStore,
};
use rstest::rstest;

use super::helpers::{build_request, catalog, memory, user_message};

#[rstest]
fn web_scraper_fails_while_search_is_enabled(
    catalog: AgentCatalog,
    memory: Arc<InMemoryMessageStore>,
) {
    let flags = CapabilityFlags::from_mapping([("web_scraping", false), ("web_search", true)]);
    let factory = AgentFactory::new(flags, catalog);

    let result = factory.create_specialized_agent("web_scraper", build_request("ws1", &memory));

    let Err(err) = result else {
        panic!("web scraper must not be built while disabled");
    };
    assert!(matches!(
        err,
        FactoryError::CapabilityDisabled {
            capability: Capability::WebScraping,
            ..
        }
    ));
    assert!(err.to_string().contains("Web scraping"));
}

#[rstest]
#[case(&["knowledge_base", "web_search", "youtube_download", "web_scraping", "media_editor"], "KnowledgeBaseAgent")]
#[case(&["web_search", "youtube_download", "web_scraping", "media_editor"], "WebSearchAgent")]
#[case(&["youtube_download", "media_editor"], "YouTubeDownloadAgent")]
#[case(&["web_scraping", "media_editor"], "WebScraperAgent")]
#[case(&["media_editor"], "MediaEditorAgent")]
#[case(&[], "AssistantAgent")]
fn researcher_selection_follows_priority(
    catalog: AgentCatalog,
    memory: Arc<InMemoryMessageStore>,
    #[case] enabled: &[&str],
    #[case] expected: &str,
) {
    let flags = CapabilityFlags::from_mapping(enabled.iter().map(|key| (*key, true)));
    let factory = AgentFactory::new(flags, catalog);

    let researcher = factory
        .create_agent(AgentRole::Researcher, build_request("researcher", &memory))
        .expect("researcher should always resolve");

    assert_eq!(researcher.implementation_name(), expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn degraded_researcher_answers_as_assistant(
    catalog: AgentCatalog,
    memory: Arc<InMemoryMessageStore>,
) {
    let factory = AgentFactory::new(CapabilityFlags::new(), catalog);
    let researcher = factory
        .create_agent(AgentRole::Researcher, build_request("researcher", &memory))
        .expect("researcher should degrade to the assistant");

    let response = researcher
        .process_message(&user_message("find me something"), None)
        .await
        .expect("assistant should answer");

    assert_eq!(researcher.role(), AgentRole::Assistant);
    assert_eq!(response.content(), "assistant answer");
}

#[rstest]
fn configuration_drives_the_factory(catalog: AgentCatalog, memory: Arc<InMemoryMessageStore>) {
    let config = AppConfig::from_toml_str(
        r#"
        [capabilities]
        enable_youtube_download = true
        enable_web_scraping = false
        "#,
    )
    .expect("configuration should parse");
    let factory = config.agent_factory(catalog);

    let downloader = factory
        .create_specialized_agent("youtube_download", build_request("yt1", &memory))
        .expect("downloader should build");
    let scraper = factory.create_specialized_agent("web_scraper", build_request("ws1", &memory));
    let available = factory.available_agent_types();

    assert_eq!(downloader.implementation_name(), "YouTubeDownloadAgent");
    assert!(matches!(scraper, Err(FactoryError::CapabilityDisabled { .. })));
    assert_eq!(available.get(&AgentKind::YoutubeDownload), Some(&true));
    assert_eq!(available.get(&AgentKind::WebScraper), Some(&false));
    assert_eq!(available.get(&AgentKind::Moderator), Some(&true));
}

#[rstest]
fn unknown_type_names_are_rejected(catalog: AgentCatalog, memory: Arc<InMemoryMessageStore>) {
    let factory = AgentFactory::new(CapabilityFlags::new(), catalog);

    let result = factory.create_specialized_agent("time_machine", build_request("tm1", &memory));

    assert!(matches!(result, Err(FactoryError::UnsupportedAgentType(_))));
}
