//! Request body for the Gemini `generateContent` API.

use llm::{Operation, Task};
use serde::Serialize;
use serde_json::Value;

/// The request body for `generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// A single user turn carrying the prompt.
    pub contents: Vec<Content>,
    /// JSON response mode, schema and sampling.
    pub generation_config: GenerationConfig,
}

/// One conversation turn.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: &'static str,
    pub parts: Vec<Part>,
}

/// A text part of a turn.
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

/// Generation settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: Value,
    pub temperature: f64,
}

impl From<&Task> for Request {
    fn from(task: &Task) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: task.user() }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: task.schema().clone(),
                temperature: temperature(task.operation()),
            },
        }
    }
}

/// Sampling temperature per call.
pub fn temperature(operation: Operation) -> f64 {
    match operation {
        Operation::Branching => 1.0,
        Operation::Refinement => 0.9,
        Operation::Scenario => 0.8,
    }
}
