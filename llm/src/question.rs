//! Questions returned by the generation backends.

use serde::{Deserialize, Serialize};

/// Number of opposing pairs on each branching question.
pub const BRANCHING_OPTIONS: usize = 8;

/// Number of free-form options on each refinement question.
pub const REFINEMENT_OPTIONS: usize = 4;

/// A pair of opposing concepts offered on a branching step
/// (e.g. "Ancient Magic" vs "Cold Logic").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub positive: String,
    pub negative: String,
}

/// One of the eight fixed world-building questions with the antithetical
/// pairs generated for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchingQuestion {
    /// The question text, echoed back by the model.
    pub question_template: String,
    /// Exactly [`BRANCHING_OPTIONS`] opposing pairs.
    pub options: Vec<ChoiceOption>,
    /// Diagnostic text attached by the model, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

/// A follow-up question generated from the path so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementQuestion {
    /// The follow-up question.
    pub question_template: String,
    /// Exactly [`REFINEMENT_OPTIONS`] short options.
    pub options: Vec<String>,
    /// Diagnostic text attached by the model, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}
