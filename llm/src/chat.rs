//! Chat-completions request body shared by Mistral and OpenAI.
//!
//! Both take the same shape: a model, a system and a user message, and
//! JSON-object response mode.

use crate::Task;
use serde::Serialize;
use serde_json::{Value, json};

/// Chat message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Chat completions request body.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model identifier.
    pub model: String,
    /// System prompt followed by the user prompt.
    pub messages: Vec<Message>,
    /// Response format; always JSON-object mode here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<Value>,
}

impl Request {
    /// Package a task for `model`.
    pub fn new(model: &str, task: &Task) -> Self {
        Self {
            model: model.to_owned(),
            messages: vec![
                Message {
                    role: Role::System,
                    content: task.system(),
                },
                Message {
                    role: Role::User,
                    content: task.user(),
                },
            ],
            response_format: Some(json!({ "type": "json_object" })),
        }
    }

    /// The request as a JSON body.
    pub fn into_body(self) -> Value {
        json!(self)
    }
}

/// Where chat backends put the generated text.
pub const TEXT_POINTER: &str = "/choices/0/message/content";
