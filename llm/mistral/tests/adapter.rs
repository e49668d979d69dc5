//! Request shape and response handling for the Mistral backend.

use llm::{Adapter, Cause, PathHistoryItem, ProviderKind, ProviderResponse, reqwest::StatusCode};
use serde_json::{Value, json};
use worldtree_mistral::Mistral;

fn provider() -> Mistral {
    Mistral::api("mk-test").expect("provider")
}

fn envelope(content: &str) -> String {
    json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] })
        .to_string()
}

fn branching_answer() -> Value {
    let options: Vec<Value> = (0..8)
        .map(|i| json!({ "positive": format!("Light {i}"), "negative": format!("Dark {i}") }))
        .collect();
    let questions: Vec<Value> = (0..8)
        .map(|i| json!({ "questionTemplate": format!("Question {i}?"), "options": options }))
        .collect();
    json!({ "questions": questions })
}

#[test]
fn branching_request_shape() {
    let request = provider().build_branching_request();
    assert_eq!(request.endpoint, "https://api.mistral.ai/v1/chat/completions");
    assert_eq!(request.header("authorization"), Some("Bearer mk-test"));
    assert_eq!(request.header("accept"), Some("application/json"));
    assert_eq!(request.header("content-type"), Some("application/json"));

    let body = &request.body;
    assert_eq!(body["model"], "mistral-large-latest");
    assert_eq!(body["response_format"], json!({ "type": "json_object" }));
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
    let system = body["messages"][0]["content"].as_str().expect("system prompt");
    assert!(system.contains("You MUST respond with a valid JSON object"));
    let user = body["messages"][1]["content"].as_str().expect("user prompt");
    assert!(user.contains("Questions:\n1. What is the overall atmosphere"));
}

#[test]
fn refinement_request_carries_history() {
    let path = vec![
        PathHistoryItem::new("What is the tone?", "Grim"),
        PathHistoryItem::new("Who holds power?", "The guilds"),
    ];
    let request = provider().build_refinement_request(&path);
    let user = request.body["messages"][1]["content"]
        .as_str()
        .expect("user prompt");
    assert!(user.contains("(Q: What is the tone? -> A: Grim), (Q: Who holds power? -> A: The guilds)"));
}

#[test]
fn parses_wrapped_branching_answer() {
    let raw = ProviderResponse::ok(envelope(&branching_answer().to_string()));
    let questions = provider().parse_branching_response(&raw).expect("questions");
    assert_eq!(questions.len(), 8);
    assert_eq!(questions[3].question_template, "Question 3?");
    assert_eq!(questions[3].options[7].negative, "Dark 7");
}

#[test]
fn error_message_is_read_from_top_level() {
    let raw = ProviderResponse::new(
        StatusCode::UNAUTHORIZED,
        json!({ "message": "Unauthorized", "request_id": "abc" }).to_string(),
    );
    let err = provider().parse_branching_response(&raw).unwrap_err();
    assert_eq!(
        err,
        Cause::Transport {
            status: Some(401),
            message: "Unauthorized".to_owned(),
        }
    );
}

#[test]
fn prose_answer_is_malformed() {
    let raw = ProviderResponse::ok(envelope("Here is a lovely world for you."));
    let err = provider().parse_scenario_response(&raw).unwrap_err();
    assert!(matches!(err, Cause::MalformedResponse(_)));
}

#[test]
fn kind_is_mistral() {
    assert_eq!(provider().kind(), ProviderKind::Mistral);
}
