//! Mistral backend.
//!
//! Targets the Mistral chat completions API in JSON-object mode.

use llm::{
    Cause,
    reqwest::header::{self, HeaderMap, HeaderValue},
};

mod provider;

/// Mistral endpoint URLs.
pub mod endpoint {
    /// Mistral chat completions endpoint.
    pub const MISTRAL: &str = "https://api.mistral.ai/v1/chat/completions";
}

/// Default model.
pub const MODEL: &str = "mistral-large-latest";

/// Mistral backend.
#[derive(Debug, Clone)]
pub struct Mistral {
    /// Request headers (authorization, content-type, accept).
    headers: HeaderMap,
    /// Chat completions endpoint URL.
    endpoint: String,
    /// Model identifier.
    model: String,
}

impl Mistral {
    /// Create a backend targeting the Mistral API.
    pub fn api(key: &str) -> Result<Self, Cause> {
        Self::custom(key, endpoint::MISTRAL)
    }

    /// Create a backend targeting a custom Mistral-compatible endpoint.
    pub fn custom(key: &str, endpoint: &str) -> Result<Self, Cause> {
        let mut headers = llm::http::bearer(key)?;
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        Ok(Self {
            headers,
            endpoint: endpoint.to_owned(),
            model: MODEL.to_owned(),
        })
    }

    /// Use a different model.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_owned();
        self
    }

    /// The model requests are sent for.
    pub fn model(&self) -> &str {
        &self.model
    }
}
