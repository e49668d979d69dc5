//! Adapter implementation for the Gemini backend.

use crate::{Gemini, Request};
use llm::{Adapter, ProviderKind, Task, Wording, reqwest::header::HeaderMap};
use serde_json::{Value, json};

impl Adapter for Gemini {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn body(&self, task: &Task) -> Value {
        json!(Request::from(task))
    }

    fn text_pointer(&self) -> &'static str {
        "/candidates/0/content/parts/0/text"
    }

    fn wording(&self) -> Wording {
        Wording::Hosted
    }
}
