//! Tests for the Stable Horde backend.

use llm::{Adapter, Cause, Operation, PathHistoryItem, ProviderResponse, reqwest::StatusCode};
use serde_json::json;
use worldtree_horde::{CLIENT_AGENT, Horde, Params, endpoint};

fn provider() -> Horde {
    Horde::api("horde-key").expect("provider")
}

fn generation(text: &str) -> ProviderResponse {
    ProviderResponse::ok(json!({ "generations": [{ "text": text }] }).to_string())
}

#[test]
fn headers_identify_the_client() {
    let request = provider().build_branching_request();
    assert_eq!(request.endpoint, endpoint::HORDE);
    assert_eq!(request.header("apikey"), Some("horde-key"));
    assert_eq!(request.header("client-agent"), Some(CLIENT_AGENT));
    assert_eq!(request.header("content-type"), Some("application/json"));
}

#[test]
fn branching_prompt_is_flattened() {
    let request = provider().build_branching_request();
    let prompt = request.body["prompt"].as_str().expect("prompt");
    assert!(prompt.starts_with(
        "You are a creative partner in a game world generator. You MUST respond with a single, valid JSON object"
    ));
    assert!(prompt.contains("\n    \n    Task: For each of the following 8 questions"));
    assert!(prompt.contains("\n    \n    Questions:\n1. What is the overall atmosphere"));
    assert_eq!(
        request.body["params"],
        json!({ "max_context_length": 4096, "max_length": 2048, "temperature": 0.8 })
    );
}

#[test]
fn refinement_params_are_shorter() {
    let path = vec![PathHistoryItem::new("Tone?", "Grim")];
    let request = provider().build_refinement_request(&path);
    let prompt = request.body["prompt"].as_str().expect("prompt");
    assert!(prompt.contains("\n\n    Task: Based on the user's path so far: (Q: Tone? -> A: Grim)."));
    assert_eq!(request.body["params"]["max_length"], 1024);
    assert_eq!(request.body["params"]["temperature"], 0.7);
}

#[test]
fn scenario_params_match_branching() {
    assert_eq!(
        Params::for_operation(Operation::Scenario),
        Params::for_operation(Operation::Branching)
    );
}

#[test]
fn fenced_generation_is_accepted() {
    let text = "```json\n{\"summary\": \"Ash falls upward.\", \"scenarioJson\": \"{}\"}\n```";
    let scenario = provider()
        .parse_scenario_response(&generation(text))
        .expect("scenario");
    assert_eq!(scenario.summary, "Ash falls upward.");
    assert!(!scenario.has_content());
}

#[test]
fn error_message_is_read_from_top_level() {
    let raw = ProviderResponse::new(
        StatusCode::FORBIDDEN,
        json!({ "message": "Wrong API key." }).to_string(),
    );
    let err = provider().parse_branching_response(&raw).unwrap_err();
    assert_eq!(
        err,
        Cause::Transport {
            status: Some(403),
            message: "Wrong API key.".to_owned(),
        }
    );
}

#[test]
fn missing_generations_is_malformed() {
    let raw = ProviderResponse::ok(json!({ "id": "abc", "kudos": 3 }).to_string());
    assert!(matches!(
        provider().parse_refinement_response(&raw),
        Err(Cause::MalformedResponse(_))
    ));
}
