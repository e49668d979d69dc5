//! OpenAI backend.
//!
//! Targets the OpenAI chat completions API, optionally scoped to an
//! organization.

use llm::{Cause, reqwest::header::HeaderMap};

mod provider;

/// OpenAI endpoint URLs.
pub mod endpoint {
    /// OpenAI chat completions.
    pub const OPENAI: &str = "https://api.openai.com/v1/chat/completions";
}

/// Default model.
pub const MODEL: &str = "gpt-4-turbo";

/// Header carrying the organization id.
pub const ORGANIZATION_HEADER: &str = "OpenAI-Organization";

/// OpenAI backend.
#[derive(Debug, Clone)]
pub struct OpenAI {
    /// Request headers (authorization, content-type, organization).
    headers: HeaderMap,
    /// Chat completions endpoint URL.
    endpoint: String,
    /// Model identifier.
    model: String,
}

impl OpenAI {
    /// Create a backend targeting the OpenAI API.
    pub fn api(key: &str) -> Result<Self, Cause> {
        Self::custom(key, endpoint::OPENAI)
    }

    /// Create a backend targeting a custom OpenAI-compatible endpoint.
    pub fn custom(key: &str, endpoint: &str) -> Result<Self, Cause> {
        Ok(Self {
            headers: llm::http::bearer(key)?,
            endpoint: endpoint.to_owned(),
            model: MODEL.to_owned(),
        })
    }

    /// Scope requests to an organization. Blank ids are ignored.
    pub fn with_organization(mut self, organization: &str) -> Result<Self, Cause> {
        let organization = organization.trim();
        if !organization.is_empty() {
            self.headers =
                llm::http::with_header(self.headers, ORGANIZATION_HEADER, organization)?;
        }
        Ok(self)
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
