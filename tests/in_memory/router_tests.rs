//! In-memory integration tests for routing decisions and error envelopes.

use std::sync::Arc;

use ambivo_agents::{
    agent::{
        adapters::AssistantAgent,
        domain::{AgentKind, AgentRole},
        ports::{LlmError, LlmRequest, LlmService},
        services::AgentCatalog,
    },
    config::AppConfig,
    message::{
        adapters::memory::InMemoryMessageStore,
        domain::{ConversationId, Message, MessageType},
    },
    routing::{
        adapters::LlmIntentClassifier,
        services::{DispatchOutcome, Router},
    },
};
use async_trait::async_trait;
use mockall::mock;
use rstest::{fixture, rstest};

use super::helpers::{
    RecordingLlm, SpecialistAgent, agent_id, build_request, catalog, memory, user_message,
    user_message_in,
};

mock! {
    Llm {}

    #[async_trait]
    impl LlmService for Llm {
        async fn generate(&self, request: &LlmRequest) -> Result<String, LlmError>;
    }
}

const NO_AGENT_PREFIX: &str =
    "I couldn't find an appropriate agent to handle your request. Available agents: ";

#[fixture]
fn router(memory: Arc<InMemoryMessageStore>) -> Router {
    Router::new(agent_id("proxy"), memory)
}

/// Router with a downloader (`yt1`) and an assistant (`as1`) registered.
#[fixture]
fn media_router(router: Router) -> Router {
    router.register_agent(SpecialistAgent::shared("yt1", AgentKind::YoutubeDownload));
    router.register_agent(SpecialistAgent::shared("as1", AgentKind::Assistant));
    router
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn youtube_link_goes_to_the_downloader(media_router: Router) {
    let response = media_router
        .dispatch(&user_message("download https://youtube.com/watch?v=abc"), None)
        .await
        .into_response();

    let routing = response.routing().expect("routing metadata should be set");
    assert_eq!(routing.routed_by, "proxy");
    assert_eq!(routing.routed_to, "yt1");
    assert_eq!(routing.routed_to_class, "YouTubeDownloadAgent");
    assert!(!routing.routing_reason.is_empty());
    assert_eq!(response.message_type(), MessageType::AgentResponse);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn media_download_outranks_web_search(router: Router) {
    router.register_agent(SpecialistAgent::shared("ws1", AgentKind::WebSearch));
    router.register_agent(SpecialistAgent::shared("yt1", AgentKind::YoutubeDownload));

    let outcome = router
        .dispatch(&user_message("search for https://youtube.com/watch?v=abc"), None)
        .await;

    assert_eq!(
        outcome.response().routing().map(|r| r.routed_to.as_str()),
        Some("yt1")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn code_request_without_executor_goes_to_assistant(media_router: Router) {
    let response = media_router
        .dispatch(&user_message("run this python script"), None)
        .await
        .into_response();

    assert_eq!(response.routing().map(|r| r.routed_to.as_str()), Some("as1"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unmatched_content_goes_to_assistant(media_router: Router) {
    let response = media_router
        .dispatch(&user_message("good morning!"), None)
        .await
        .into_response();

    let routing = response.routing().expect("routing metadata should be set");
    assert_eq!(routing.routed_to, "as1");
    assert_eq!(routing.routed_to_class, "AssistantAgent");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_registry_lists_no_agents(router: Router) {
    let outcome = router.dispatch(&user_message("hello"), None).await;

    assert!(matches!(outcome, DispatchOutcome::NoAgent { .. }));
    let response = outcome.into_response();
    assert_eq!(response.message_type(), MessageType::Error);
    assert_eq!(response.content(), format!("{NO_AGENT_PREFIX}[]"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn miss_lists_every_registered_agent(router: Router) {
    router.register_agent(SpecialistAgent::shared("kb1", AgentKind::KnowledgeBase));
    router.register_agent(SpecialistAgent::shared("me1", AgentKind::MediaEditor));
    router.register_agent(SpecialistAgent::shared("mod1", AgentKind::Moderator));

    let response = router
        .dispatch(&user_message("good morning!"), None)
        .await
        .into_response();

    assert_eq!(response.message_type(), MessageType::Error);
    for label in [
        "KnowledgeBaseAgent (kb1)",
        "MediaEditorAgent (me1)",
        "ModeratorAgent (mod1)",
    ] {
        assert!(response.content().contains(label), "missing {label}");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn routing_is_deterministic(media_router: Router) {
    let message = user_message("download audio from youtu.be/xyz");

    let first = media_router.dispatch(&message, None).await.into_response();
    let second = media_router.dispatch(&message, None).await.into_response();

    assert_eq!(first.routing(), second.routing());
}

#[rstest]
fn registration_is_idempotent(router: Router) {
    let downloader = SpecialistAgent::shared("yt1", AgentKind::YoutubeDownload);

    assert!(router.register_agent(downloader.clone()));
    assert!(router.register_agent(downloader.clone()));
    assert_eq!(router.registry().len(), 1);

    assert!(router.unregister_agent(&agent_id("yt1")));
    assert!(!router.unregister_agent(&agent_id("yt1")));
    assert!(router.registry().is_empty());

    assert!(router.register_agent(downloader));
    let ids: Vec<String> = router
        .get_registered_agents()
        .expect("registry should be readable")
        .iter()
        .map(|entry| entry.id().as_str().to_owned())
        .collect();
    assert_eq!(ids, vec!["yt1"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_deployment_routes_end_to_end(
    catalog: AgentCatalog,
    memory: Arc<InMemoryMessageStore>,
) {
    let config = AppConfig::from_toml_str(
        r#"
        [capabilities]
        youtube_download = true
        web_search = true

        [router]
        agent_id = "front_door"
        "#,
    )
    .expect("configuration should parse");
    let factory = config.agent_factory(catalog);
    let router = Router::new(agent_id(&config.router.agent_id), memory.clone());
    let researcher = factory
        .create_agent(AgentRole::Researcher, build_request("ws1", &memory))
        .expect("researcher should build");
    let assistant = factory
        .create_agent(AgentRole::Assistant, build_request("as1", &memory))
        .expect("assistant should build");
    router.register_agent(researcher);
    router.register_agent(assistant);

    let searched = router
        .dispatch(&user_message("search the web for rust"), None)
        .await
        .into_response();
    let chatted = router
        .dispatch(&user_message("good morning!"), None)
        .await
        .into_response();

    let searched_routing = searched.routing().expect("routing metadata should be set");
    assert_eq!(searched_routing.routed_by, "front_door");
    assert_eq!(searched_routing.routed_to_class, "WebSearchAgent");
    assert_eq!(chatted.content(), "assistant answer");
    assert_eq!(chatted.routing().map(|r| r.routed_to.as_str()), Some("as1"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn shared_memory_records_each_turn_once(memory: Arc<InMemoryMessageStore>) {
    let llm = Arc::new(RecordingLlm::default());
    let router = Router::new(agent_id("proxy"), memory.clone());
    router.register_agent(Arc::new(AssistantAgent::new(
        agent_id("as1"),
        llm.clone(),
        memory.clone(),
    )));
    let conversation_id = ConversationId::new();

    for content in ["first question", "second question"] {
        let outcome = router
            .dispatch(&user_message_in(conversation_id, content), None)
            .await;
        assert!(outcome.is_routed());
    }

    let history = router
        .conversation_history(Some(conversation_id), 10)
        .await
        .expect("history should be readable");
    let contents: Vec<&str> = history.iter().map(Message::content).collect();
    assert_eq!(contents, vec!["first question", "ok", "second question", "ok"]);

    let prompts = llm.prompts();
    assert_eq!(prompts.len(), 2);
    let second_prompt = prompts.get(1).expect("second prompt recorded");
    assert_eq!(second_prompt.matches("first question").count(), 1);
    assert!(second_prompt.ends_with("second question"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn follow_up_is_routed_with_conversation_context(memory: Arc<InMemoryMessageStore>) {
    let mut llm = MockLlm::new();
    llm.expect_generate().times(3).returning(|request| {
        let label = if request.prompt.contains("search the web for rust") {
            "web_search"
        } else {
            "none"
        };
        Ok(label.to_owned())
    });
    let router = Router::new(agent_id("proxy"), memory)
        .with_classifier(Arc::new(LlmIntentClassifier::new(Arc::new(llm))));
    router.register_agent(SpecialistAgent::shared("ws1", AgentKind::WebSearch));
    router.register_agent(SpecialistAgent::shared("as1", AgentKind::Assistant));
    let conversation_id = ConversationId::new();

    let searched = router
        .dispatch(&user_message_in(conversation_id, "search the web for rust"), None)
        .await;
    let repeated = router
        .dispatch(&user_message_in(conversation_id, "do that again"), None)
        .await;
    let out_of_context = router.dispatch(&user_message("do that again"), None).await;

    let routed_to = |outcome: &DispatchOutcome| {
        outcome
            .decision()
            .map(|decision| decision.agent_id.as_str().to_owned())
    };
    assert_eq!(routed_to(&searched).as_deref(), Some("ws1"));
    assert_eq!(routed_to(&repeated).as_deref(), Some("ws1"));
    assert_eq!(routed_to(&out_of_context).as_deref(), Some("as1"));
}
