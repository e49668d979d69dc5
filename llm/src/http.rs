//! HTTP transport shared by every backend.
//!
//! Adapters describe a call as a [`ProviderRequest`] (endpoint, headers,
//! JSON body) and read back a [`ProviderResponse`] (status and raw body).
//! [`HttpTransport`] performs the POST with a shared `reqwest::Client`;
//! tests substitute their own [`Transport`].

use crate::Cause;
use reqwest::{
    Client, Method, StatusCode,
    header::{self, HeaderMap, HeaderName, HeaderValue},
};
use serde_json::Value;

/// A provider-specific request: one JSON POST.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// Target URL.
    pub endpoint: String,
    /// Request headers, authentication included.
    pub headers: HeaderMap,
    /// JSON body.
    pub body: Value,
}

impl ProviderRequest {
    /// Look up a header as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A provider's raw answer.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Raw response body.
    pub body: String,
}

impl ProviderResponse {
    /// A response with the given status and body.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` response.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

/// Sends provider requests.
pub trait Transport: Send + Sync {
    /// POST the request and return whatever the provider answered. Only
    /// failures to get an answer at all are errors here; status handling
    /// belongs to the adapter.
    fn post(
        &self,
        request: &ProviderRequest,
    ) -> impl Future<Output = Result<ProviderResponse, Cause>> + Send;
}

/// [`Transport`] over a `reqwest::Client`.
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Wrap an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn post(&self, request: &ProviderRequest) -> Result<ProviderResponse, Cause> {
        tracing::trace!("request: {}", request.body);
        let response = self
            .client
            .request(Method::POST, &request.endpoint)
            .headers(request.headers.clone())
            .json(&request.body)
            .send()
            .await
            .map_err(in_flight)?;

        let status = response.status();
        let body = response.text().await.map_err(in_flight)?;
        tracing::trace!("response ({status}): {body}");
        Ok(ProviderResponse { status, body })
    }
}

fn in_flight(err: reqwest::Error) -> Cause {
    Cause::Transport {
        status: err.status().map(|s| s.as_u16()),
        message: err.to_string(),
    }
}

/// The `Content-Type: application/json` header every backend sends.
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers
}

/// Headers with `Authorization: Bearer <key>`.
pub fn bearer(key: &str) -> Result<HeaderMap, Cause> {
    let mut headers = json_headers();
    headers.insert(header::AUTHORIZATION, header_value(&format!("Bearer {key}"))?);
    Ok(headers)
}

/// Add a custom header, e.g. `x-goog-api-key` or `apikey`.
pub fn with_header(mut headers: HeaderMap, name: &str, value: &str) -> Result<HeaderMap, Cause> {
    let name = name
        .parse::<HeaderName>()
        .map_err(|e| Cause::Configuration(format!("invalid header name {name}: {e}")))?;
    headers.insert(name, header_value(value)?);
    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue, Cause> {
    value
        .parse::<HeaderValue>()
        .map_err(|e| Cause::Configuration(format!("credential is not a valid header value: {e}")))
}
