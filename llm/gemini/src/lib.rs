//! Gemini backend, the hosted default.
//!
//! Calls `generateContent` with the response schema passed structurally,
//! so the prompt itself carries no schema text.

use llm::{Cause, reqwest::header::HeaderMap};
pub use request::Request;

mod provider;
mod request;

/// Gemini endpoint URLs.
pub mod endpoint {
    /// Generative Language API base.
    pub const GEMINI: &str = "https://generativelanguage.googleapis.com/v1beta";

    /// The `generateContent` URL for `model` under `base`.
    pub fn generate_content(base: &str, model: &str) -> String {
        format!("{}/models/{model}:generateContent", base.trim_end_matches('/'))
    }
}

/// Default model.
pub const MODEL: &str = "gemini-2.5-flash";

/// Header carrying the API key.
pub const KEY_HEADER: &str = "x-goog-api-key";

/// Gemini backend.
#[derive(Debug, Clone)]
pub struct Gemini {
    headers: HeaderMap,
    base: String,
    model: String,
    endpoint: String,
}

impl Gemini {
    /// Create a backend targeting the Gemini API.
    pub fn api(key: &str) -> Result<Self, Cause> {
        Self::custom(key, endpoint::GEMINI)
    }

    /// Create a backend targeting a custom API base.
    pub fn custom(key: &str, base: &str) -> Result<Self, Cause> {
        let headers = llm::http::with_header(llm::http::json_headers(), KEY_HEADER, key)?;
        Ok(Self {
            headers,
            base: base.to_owned(),
            model: MODEL.to_owned(),
            endpoint: endpoint::generate_content(base, MODEL),
        })
    }

    /// Use a different model.
    pub fn with_model(mut self, model: &str) -> Self {
        self.endpoint = endpoint::generate_content(&self.base, model);
        self.model = model.to_owned();
        self
    }

    /// The model requests are sent for.
    pub fn model(&self) -> &str {
        &self.model
    }
}
