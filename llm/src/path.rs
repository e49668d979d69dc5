//! The user's path through the questionnaire.
//!
//! A path is an ordered list of question/answer pairs. The first
//! [`BRANCHING_STEPS`] come from the branching questions, the rest from
//! the refinement questions, for [`PATH_LENGTH`] steps in total.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of steps in a completed journey.
pub const PATH_LENGTH: usize = 10;

/// Number of branching steps before refinement starts.
pub const BRANCHING_STEPS: usize = 8;

/// One answered step of the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathHistoryItem {
    /// The question as shown to the user.
    pub question: String,
    /// The option the user picked.
    pub choice: String,
}

impl PathHistoryItem {
    /// Create a step from a question and the picked choice.
    pub fn new(question: impl Into<String>, choice: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            choice: choice.into(),
        }
    }
}

/// Errors raised when reading a bud back.
#[derive(Debug, Error)]
pub enum BudError {
    #[error("could not parse bud data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid bud data: expected {PATH_LENGTH} steps, found {0}")]
    Length(usize),
}

/// A completed journey, serialized so it can be saved or shared and later
/// resumed at the final step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bud {
    path: Vec<PathHistoryItem>,
}

impl Bud {
    /// Wrap a completed path. Fails unless it has exactly [`PATH_LENGTH`] steps.
    pub fn new(path: Vec<PathHistoryItem>) -> Result<Self, BudError> {
        if path.len() != PATH_LENGTH {
            return Err(BudError::Length(path.len()));
        }
        Ok(Self { path })
    }

    /// Parse bud text: a JSON array of exactly [`PATH_LENGTH`]
    /// `{question, choice}` objects.
    pub fn parse(text: &str) -> Result<Self, BudError> {
        let path: Vec<PathHistoryItem> = serde_json::from_str(text.trim())?;
        Self::new(path)
    }

    /// Render the bud as pretty-printed JSON.
    pub fn export(&self) -> Result<String, BudError> {
        Ok(serde_json::to_string_pretty(&self.path)?)
    }

    /// The steps of the journey.
    pub fn path(&self) -> &[PathHistoryItem] {
        &self.path
    }

    /// Take the steps out of the bud.
    pub fn into_path(self) -> Vec<PathHistoryItem> {
        self.path
    }
}
