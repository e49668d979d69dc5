//! Adapter implementation for the OpenAI backend.

use crate::OpenAI;
use llm::{Adapter, ProviderKind, Task, chat, reqwest::header::HeaderMap};
use serde_json::Value;

impl Adapter for OpenAI {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAI
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn body(&self, task: &Task) -> Value {
        chat::Request::new(&self.model, task).into_body()
    }

    fn text_pointer(&self) -> &'static str {
        chat::TEXT_POINTER
    }
}
