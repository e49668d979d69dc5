//! Coerce generated text into the shared result types.
//!
//! Backends hand back the model's text; everything past that point is the
//! same for all of them: strip code fences, parse, check the shape.

use crate::{
    BRANCHING_OPTIONS, BRANCHING_STEPS, BranchingQuestion, Cause, NO_SUMMARY, REFINEMENT_OPTIONS,
    RefinementQuestion, Scenario, scenario::EMPTY_SCENARIO,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Fewest follow-up questions a refinement answer may carry.
const MIN_REFINEMENTS: usize = 2;

/// Parse generated text as JSON, tolerating markdown code fences.
pub(crate) fn decode(text: &str) -> Result<Value, Cause> {
    let cleaned = text.trim().replace("```json", "").replace("```", "");
    serde_json::from_str(cleaned.trim())
        .map_err(|e| malformed(format!("generated text is not valid JSON: {e}")))
}

/// Validate eight branching questions of eight pairs each.
pub(crate) fn branching(value: Value) -> Result<Vec<BranchingQuestion>, Cause> {
    let questions: Vec<BranchingQuestion> = items(value, "branching questions")?;
    if questions.len() != BRANCHING_STEPS {
        return Err(malformed(format!(
            "expected {BRANCHING_STEPS} branching questions, got {}",
            questions.len()
        )));
    }
    for (i, question) in questions.iter().enumerate() {
        if question.question_template.trim().is_empty() {
            return Err(malformed(format!("branching question {i} has no questionTemplate")));
        }
        if question.options.len() != BRANCHING_OPTIONS {
            return Err(malformed(format!(
                "branching question {i} has {} option pairs, expected {BRANCHING_OPTIONS}",
                question.options.len()
            )));
        }
    }
    Ok(questions)
}

/// Validate at least two follow-up questions of four options each.
pub(crate) fn refinement(value: Value) -> Result<Vec<RefinementQuestion>, Cause> {
    let questions: Vec<RefinementQuestion> = items(value, "refinement questions")?;
    if questions.len() < MIN_REFINEMENTS {
        return Err(malformed(format!(
            "expected at least {MIN_REFINEMENTS} refinement questions, got {}",
            questions.len()
        )));
    }
    for (i, question) in questions.iter().enumerate() {
        if question.question_template.trim().is_empty() {
            return Err(malformed(format!("refinement question {i} has no questionTemplate")));
        }
        if question.options.len() != REFINEMENT_OPTIONS {
            return Err(malformed(format!(
                "refinement question {i} has {} options, expected {REFINEMENT_OPTIONS}",
                question.options.len()
            )));
        }
    }
    Ok(questions)
}

/// Read a scenario object, filling in placeholders for absent fields.
/// A non-object answer carries no fields and gets both placeholders.
pub(crate) fn scenario(value: Value) -> Result<Scenario, Cause> {
    let mut map = match value {
        Value::Object(map) => map,
        Value::Null => return Err(malformed("expected a scenario object, got null".to_owned())),
        _ => Map::new(),
    };

    let summary = match map.remove("summary") {
        Some(Value::String(s)) if !s.trim().is_empty() => s,
        _ => NO_SUMMARY.to_owned(),
    };
    let scenario_json = match map.remove("scenarioJson") {
        Some(Value::String(s)) if !s.trim().is_empty() => s,
        Some(Value::String(_)) | Some(Value::Null) | None => EMPTY_SCENARIO.to_owned(),
        // Some models inline the object instead of a string.
        Some(other) => other.to_string(),
    };

    Ok(Scenario {
        summary,
        scenario_json,
    })
}

/// Deserialize a list, unwrapping an object whose only array-valued field
/// holds the answer (JSON-object mode does this).
fn items<T: DeserializeOwned>(value: Value, what: &str) -> Result<Vec<T>, Cause> {
    let list = match value {
        Value::Array(list) => list,
        Value::Object(map) => {
            let mut arrays = map.into_iter().filter_map(|(_, v)| match v {
                Value::Array(list) => Some(list),
                _ => None,
            });
            match (arrays.next(), arrays.next()) {
                (Some(list), None) => list,
                (None, _) => {
                    return Err(malformed(format!(
                        "expected an array of {what}, got an object"
                    )));
                }
                (Some(_), Some(_)) => {
                    return Err(malformed(format!(
                        "expected one array of {what}, got an object with several"
                    )));
                }
            }
        }
        other => {
            return Err(malformed(format!("expected an array of {what}, got {other}")));
        }
    };
    serde_json::from_value(Value::Array(list)).map_err(|e| malformed(format!("invalid {what}: {e}")))
}

fn malformed(message: String) -> Cause {
    Cause::MalformedResponse(message)
}
