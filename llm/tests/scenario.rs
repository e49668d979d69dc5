//! Tests for the scenario helpers.

extern crate worldtree_llm as llm;

use llm::{NO_SUMMARY, Scenario};
use serde_json::Value;

#[test]
fn failure_keeps_error_details() {
    let scenario = Scenario::failure("Gemini API error during scenario generation: HTTP 503: overloaded");
    assert_eq!(
        scenario.summary,
        "An error occurred while forging the final world scenario."
    );
    let details: Value = serde_json::from_str(&scenario.scenario_json).unwrap();
    assert_eq!(details["error"], "Failed to generate scenario.");
    assert_eq!(
        details["details"],
        "Gemini API error during scenario generation: HTTP 503: overloaded"
    );
    assert!(scenario.scenario_json.contains("\n  \"error\""));
}

#[test]
fn has_content_ignores_empty_object() {
    let empty = Scenario {
        summary: NO_SUMMARY.to_owned(),
        scenario_json: "{}".to_owned(),
    };
    assert!(!empty.has_content());
    let blank = Scenario {
        scenario_json: "  ".to_owned(),
        ..empty.clone()
    };
    assert!(!blank.has_content());
    let full = Scenario {
        scenario_json: r#"{"tone":"bleak"}"#.to_owned(),
        ..empty
    };
    assert!(full.has_content());
}

#[test]
fn pretty_json_reindents_or_falls_back() {
    let scenario = Scenario {
        summary: "s".to_owned(),
        scenario_json: r#"{"tone":"bleak","moons":[1,2]}"#.to_owned(),
    };
    assert_eq!(
        scenario.pretty_json(),
        "{\n  \"tone\": \"bleak\",\n  \"moons\": [\n    1,\n    2\n  ]\n}"
    );

    let raw = Scenario {
        summary: "s".to_owned(),
        scenario_json: "tone: bleak".to_owned(),
    };
    assert_eq!(raw.pretty_json(), "tone: bleak");
}

#[test]
fn serializes_with_wire_names() {
    let scenario = Scenario {
        summary: "s".to_owned(),
        scenario_json: "{}".to_owned(),
    };
    assert_eq!(
        serde_json::to_string(&scenario).unwrap(),
        r#"{"summary":"s","scenarioJson":"{}"}"#
    );
}
