//! Adapter implementation for the Horde backend.

use crate::{Horde, Request};
use llm::{Adapter, ProviderKind, Task, reqwest::header::HeaderMap};
use serde_json::{Value, json};

impl Adapter for Horde {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Horde
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
        "/generations/0/text"
    }

    fn error_pointer(&self) -> &'static str {
        "/message"
    }
}
