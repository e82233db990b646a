//! Integration tests for loading configuration.

use std::io::Write;
use std::sync::Arc;

use ambivo_agents::{
    agent::domain::Capability,
    config::{AppConfig, ClassifierKind, ConfigError},
    message::adapters::memory::InMemoryMessageStore,
};
use serde_json::json;
use tempfile::NamedTempFile;

#[test]
fn file_configuration_is_loaded() {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    write!(
        file,
        r#"
        [capabilities]
        enable_knowledge_base = true
        web_search = false
        teleportation = true

        [router]
        agent_id = "proxy_eu"
        classifier = "llm"
        history_limit = 25

        [logging]
        filter = "ambivo_agents=debug"
        "#
    )
    .expect("config should be written");

    let config = AppConfig::from_file(file.path()).expect("config should load");
    let flags = config.capability_flags();

    assert!(flags.is_enabled(Capability::KnowledgeBase));
    assert!(!flags.is_enabled(Capability::WebSearch));
    assert_eq!(flags.enabled().count(), 1);
    assert_eq!(config.router.agent_id, "proxy_eu");
    assert_eq!(config.router.classifier, ClassifierKind::Llm);
    assert_eq!(config.router.history_limit, 25);
    assert_eq!(config.logging.filter, "ambivo_agents=debug");
}

#[test]
fn empty_configuration_uses_defaults() {
    let config = AppConfig::from_toml_str("").expect("empty config should parse");

    assert_eq!(config.capability_flags().enabled().count(), 0);
    assert_eq!(config.router.agent_id, "proxy");
    assert_eq!(config.router.classifier, ClassifierKind::Keyword);
    assert_eq!(config.router.history_limit, 10);
    assert_eq!(config.logging.filter, "info");
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("absent.toml");

    let err = AppConfig::from_file(&path).expect_err("missing file should fail");

    assert!(matches!(err, ConfigError::Io { ref path, .. } if path.ends_with("absent.toml")));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_configuration_is_rejected() {
    let result = AppConfig::from_toml_str("[capabilities]\nweb_search = \"yes\"");

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn router_request_carries_router_settings() {
    let config = AppConfig::from_toml_str("[router]\nclassifier = \"llm\"\nhistory_limit = 5")
        .expect("config should parse");

    let request = config
        .router_request(Arc::new(InMemoryMessageStore::new()), None)
        .expect("router id should be valid");

    assert_eq!(request.agent_id.as_str(), "proxy");
    assert_eq!(request.option("classifier"), Some(&json!("llm")));
    assert_eq!(request.option("history_limit"), Some(&json!(5)));
}

#[test]
fn invalid_router_id_is_rejected() {
    let config = AppConfig::from_toml_str("[router]\nagent_id = \"not valid\"")
        .expect("config should parse");

    let result = config.router_request(Arc::new(InMemoryMessageStore::new()), None);

    assert!(matches!(result, Err(ConfigError::RouterId(_))));
}
