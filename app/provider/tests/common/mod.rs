//! Shared fixtures: a recording transport and canned provider answers.
#![allow(dead_code)]

use llm::{Cause, PathHistoryItem, ProviderRequest, ProviderResponse, Transport};
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::{collections::VecDeque, sync::Arc};

/// Records every request and answers from a queue.
#[derive(Clone, Default)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<ProviderRequest>>>,
    replies: Arc<Mutex<VecDeque<ProviderResponse>>>,
}

impl Recorder {
    pub fn reply(self, response: ProviderResponse) -> Self {
        self.replies.lock().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().clone()
    }
}

impl Transport for Recorder {
    async fn post(&self, request: &ProviderRequest) -> Result<ProviderResponse, Cause> {
        self.requests.lock().push(request.clone());
        let reply = self.replies.lock().pop_front();
        reply.ok_or_else(|| Cause::Transport {
            status: None,
            message: "connection refused".to_owned(),
        })
    }
}

pub fn branching_answer() -> Value {
    let options: Vec<Value> = (0..8)
        .map(|i| json!({ "positive": format!("Order {i}"), "negative": format!("Chaos {i}") }))
        .collect();
    let questions: Vec<Value> = llm::prompt::FIXED_QUESTIONS
        .iter()
        .map(|q| json!({ "questionTemplate": q, "options": options }))
        .collect();
    Value::Array(questions)
}

pub fn refinement_answer() -> Value {
    json!([
        { "questionTemplate": "What do sailors fear?", "options": ["Calm", "Song", "Fog", "Gulls"] },
        { "questionTemplate": "What is traded at dusk?", "options": ["Names", "Salt", "Years", "Teeth"] },
    ])
}

pub fn scenario_answer() -> Value {
    json!({
        "summary": "A salt-crusted archipelago. Its tides keep the ledger of every oath.",
        "scenarioJson": "{\"key_locations\":[\"Brinehold\",\"The Ledger Reef\",\"Gullspire\"]}",
    })
}

pub fn gemini(text: &Value) -> ProviderResponse {
    ProviderResponse::ok(
        json!({ "candidates": [{ "content": { "parts": [{ "text": text.to_string() }] } }] })
            .to_string(),
    )
}

pub fn chat(text: &Value) -> ProviderResponse {
    ProviderResponse::ok(
        json!({ "choices": [{ "message": { "role": "assistant", "content": text.to_string() } }] })
            .to_string(),
    )
}

pub fn horde(text: &Value) -> ProviderResponse {
    ProviderResponse::ok(json!({ "generations": [{ "text": text.to_string() }] }).to_string())
}

pub fn path(len: usize) -> Vec<PathHistoryItem> {
    (1..=len)
        .map(|i| PathHistoryItem::new(format!("Question {i}?"), format!("Choice {i}")))
        .collect()
}

/// Config with a Gemini key that does not depend on the environment.
pub fn config() -> worldtree_provider::Config {
    let mut config = worldtree_provider::Config::default();
    config.gemini.api_key = Some("gemini-key".to_owned());
    config
}
