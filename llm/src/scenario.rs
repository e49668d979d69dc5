//! The final world scenario.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt::Display;

/// Summary used when a backend omits one.
pub const NO_SUMMARY: &str = "No summary provided.";

/// Scenario JSON used when a backend omits one.
pub(crate) const EMPTY_SCENARIO: &str = "{}";

const FAILURE_SUMMARY: &str = "An error occurred while forging the final world scenario.";

/// The terminal artifact of a completed journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Two-sentence summary of the world.
    pub summary: String,
    /// Serialized JSON describing the world. Opaque to this crate.
    pub scenario_json: String,
}

impl Scenario {
    /// The artifact shown in place of a scenario when the final call
    /// failed. The error message is kept under `details`.
    pub fn failure(err: impl Display) -> Self {
        let details = json!({
            "error": "Failed to generate scenario.",
            "details": err.to_string(),
        });
        Self {
            summary: FAILURE_SUMMARY.to_owned(),
            scenario_json: serde_json::to_string_pretty(&details)
                .unwrap_or_else(|_| details.to_string()),
        }
    }

    /// Whether the scenario carries anything beyond the empty object.
    pub fn has_content(&self) -> bool {
        let trimmed = self.scenario_json.trim();
        !trimmed.is_empty() && trimmed != EMPTY_SCENARIO
    }

    /// The scenario JSON re-indented for display, or the raw text when it
    /// does not parse.
    pub fn pretty_json(&self) -> String {
        serde_json::from_str::<Value>(&self.scenario_json)
            .ok()
            .and_then(|value| serde_json::to_string_pretty(&value).ok())
            .unwrap_or_else(|| self.scenario_json.clone())
    }
}
