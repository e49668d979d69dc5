//! Tests for `build_provider()`.

use llm::{Adapter, Cause, ProviderKind};
use worldtree_provider::{
    Config, MemoryStore, Provider, build_provider,
    credentials::{MISTRAL_API_KEY, OPENAI_API_KEY, STABLEHORDE_API_KEY},
};

fn config() -> Config {
    let mut config = Config::default();
    config.gemini.api_key = Some("g".to_owned());
    config
}

#[test]
fn builds_each_variant() {
    let store = MemoryStore::new()
        .with(MISTRAL_API_KEY, "mk")
        .with(STABLEHORDE_API_KEY, "hk")
        .with(OPENAI_API_KEY, "sk");
    for kind in ProviderKind::PRIORITY {
        let provider = build_provider(kind, &store, &config()).unwrap();
        assert_eq!(provider.kind(), kind);
    }
}

#[test]
fn mistral_honours_overrides() {
    let mut config = config();
    config.mistral.model = Some("mistral-small-latest".into());
    config.mistral.base_url = Some("http://localhost:9000/v1/chat/completions".to_owned());
    let store = MemoryStore::new().with(MISTRAL_API_KEY, "mk");

    let provider = build_provider(ProviderKind::Mistral, &store, &config).unwrap();
    assert!(matches!(provider, Provider::Mistral(_)));
    assert_eq!(provider.endpoint(), "http://localhost:9000/v1/chat/completions");
    let request = provider.build_branching_request();
    assert_eq!(request.body["model"], "mistral-small-latest");
}

#[test]
fn horde_uses_configured_client_agent() {
    let mut config = config();
    config.horde.client_agent = "MyTool/1.0".into();
    let store = MemoryStore::new().with(STABLEHORDE_API_KEY, "hk");

    let provider = build_provider(ProviderKind::Horde, &store, &config).unwrap();
    let request = provider.build_branching_request();
    assert_eq!(request.header("client-agent"), Some("MyTool/1.0"));
}

#[test]
fn keyed_backend_without_key_is_a_configuration_error() {
    let err = build_provider(ProviderKind::OpenAI, &MemoryStore::new(), &config()).unwrap_err();
    assert!(matches!(err, Cause::Configuration(_)));
}

#[test]
fn gemini_reports_missing_env_var() {
    let mut config = Config::default();
    config.gemini.api_key_env = "WORLDTREE_TEST_KEY_THAT_IS_NEVER_SET".into();
    let err = build_provider(ProviderKind::Gemini, &MemoryStore::new(), &config).unwrap_err();
    assert_eq!(
        err,
        Cause::Configuration(
            "WORLDTREE_TEST_KEY_THAT_IS_NEVER_SET is not set in the environment".to_owned()
        )
    );
}

#[test]
fn gemini_blank_config_key_uses_environment() {
    let mut config = Config::default();
    config.gemini.api_key = Some(" ".to_owned());
    config.gemini.api_key_env = "PATH".into();
    let provider = build_provider(ProviderKind::Gemini, &MemoryStore::new(), &config);
    assert!(matches!(provider, Ok(Provider::Gemini(_))));
}
