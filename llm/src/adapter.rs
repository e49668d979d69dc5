//! The contract every generation backend implements.
//!
//! A backend is described by a handful of facts: where to POST, which
//! headers to send, how to shape the body for a [`Task`], and where the
//! generated text and error message sit in its response envelope. The
//! request builders and response parsers are provided on top of those.

use crate::{
    BranchingQuestion, Cause, PathHistoryItem, ProviderKind, ProviderRequest, ProviderResponse,
    RefinementQuestion, Scenario, Task, Wording, normalize,
};
use reqwest::header::HeaderMap;
use serde_json::Value;

/// A provider-specific request builder and response parser.
pub trait Adapter: Send + Sync {
    /// Which backend this is.
    fn kind(&self) -> ProviderKind;

    /// Target URL for every call.
    fn endpoint(&self) -> &str;

    /// Headers for every call, authentication included.
    fn headers(&self) -> &HeaderMap;

    /// The provider-specific body carrying `task`.
    fn body(&self, task: &Task) -> Value;

    /// JSON pointer to the generated text in a success envelope.
    fn text_pointer(&self) -> &'static str;

    /// JSON pointer to the provider's message in an error envelope.
    fn error_pointer(&self) -> &'static str {
        "/error/message"
    }

    /// Which phrasing of the instructions this backend gets.
    fn wording(&self) -> Wording {
        Wording::Keyed
    }

    /// Package a task as a request.
    fn request(&self, task: &Task) -> ProviderRequest {
        ProviderRequest {
            endpoint: self.endpoint().to_owned(),
            headers: self.headers().clone(),
            body: self.body(task),
        }
    }

    /// Request for the eight branching questions.
    fn build_branching_request(&self) -> ProviderRequest {
        self.request(&Task::branching(self.wording()))
    }

    /// Request for the follow-up questions.
    fn build_refinement_request(&self, path: &[PathHistoryItem]) -> ProviderRequest {
        self.request(&Task::refinement(path, self.wording()))
    }

    /// Request for the final scenario.
    fn build_scenario_request(&self, path: &[PathHistoryItem]) -> ProviderRequest {
        self.request(&Task::scenario(path, self.wording()))
    }

    /// Exactly eight branching questions of eight pairs each.
    fn parse_branching_response(
        &self,
        raw: &ProviderResponse,
    ) -> Result<Vec<BranchingQuestion>, Cause> {
        normalize::branching(self.generated(raw)?)
    }

    /// At least two follow-up questions of four options each.
    fn parse_refinement_response(
        &self,
        raw: &ProviderResponse,
    ) -> Result<Vec<RefinementQuestion>, Cause> {
        normalize::refinement(self.generated(raw)?)
    }

    /// The scenario, with placeholders for a missing summary or JSON.
    fn parse_scenario_response(&self, raw: &ProviderResponse) -> Result<Scenario, Cause> {
        normalize::scenario(self.generated(raw)?)
    }

    /// Check the status, unwrap the envelope, and parse the generated text.
    fn generated(&self, raw: &ProviderResponse) -> Result<Value, Cause> {
        let envelope = serde_json::from_str::<Value>(&raw.body);
        if !raw.status.is_success() {
            let message = envelope
                .ok()
                .as_ref()
                .and_then(|v| v.pointer(self.error_pointer()))
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_owned)
                .unwrap_or_else(|| {
                    raw.status
                        .canonical_reason()
                        .unwrap_or("unknown status")
                        .to_owned()
                });
            return Err(Cause::Transport {
                status: Some(raw.status.as_u16()),
                message,
            });
        }

        let envelope = envelope.map_err(|e| {
            Cause::MalformedResponse(format!("response body is not valid JSON: {e}"))
        })?;
        let text = envelope
            .pointer(self.text_pointer())
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Cause::MalformedResponse(format!(
                    "no generated text at {} in the response",
                    self.text_pointer()
                ))
            })?;
        normalize::decode(text)
    }
}
