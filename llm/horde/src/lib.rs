//! Stable Horde text backend.
//!
//! A completion-style API: the role, schema and instruction go out as a
//! single flattened prompt.

use llm::{Cause, reqwest::header::HeaderMap};
pub use request::{Params, Request};

mod provider;
mod request;

/// Stable Horde endpoint URLs.
pub mod endpoint {
    /// Synchronous text generation.
    pub const HORDE: &str = "https://stablehorde.net/api/v2/generate/text";
}

/// Client identification the Horde asks integrations to send.
pub const CLIENT_AGENT: &str = "GameWorldScenarioGenerator/3.4";

/// Stable Horde backend.
#[derive(Debug, Clone)]
pub struct Horde {
    /// Request headers (apikey, Client-Agent, content-type).
    headers: HeaderMap,
    /// Generation endpoint URL.
    endpoint: String,
}

impl Horde {
    /// Create a backend targeting the public Horde.
    pub fn api(key: &str) -> Result<Self, Cause> {
        Self::custom(key, endpoint::HORDE, CLIENT_AGENT)
    }

    /// Create a backend targeting a custom endpoint with its own agent string.
    pub fn custom(key: &str, endpoint: &str, client_agent: &str) -> Result<Self, Cause> {
        let headers = llm::http::with_header(llm::http::json_headers(), "apikey", key)?;
        let headers = llm::http::with_header(headers, "Client-Agent", client_agent)?;
        Ok(Self {
            headers,
            endpoint: endpoint.to_owned(),
        })
    }
}
