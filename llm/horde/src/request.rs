//! Request body for the Horde text generation API.

use llm::{Operation, Task};
use serde::Serialize;

/// Context window every request advertises.
pub const MAX_CONTEXT_LENGTH: u32 = 4096;

/// The request body for `generate/text`.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The flattened prompt.
    pub prompt: String,
    /// Generation parameters.
    pub params: Params,
}

/// Generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Params {
    pub max_context_length: u32,
    pub max_length: u32,
    pub temperature: f64,
}

impl Params {
    /// Parameters for `operation`: refinement answers are short and a
    /// little cooler than the rest.
    pub fn for_operation(operation: Operation) -> Self {
        let (max_length, temperature) = match operation {
            Operation::Branching | Operation::Scenario => (2048, 0.8),
            Operation::Refinement => (1024, 0.7),
        };
        Self {
            max_context_length: MAX_CONTEXT_LENGTH,
            max_length,
            temperature,
        }
    }
}

impl From<&Task> for Request {
    fn from(task: &Task) -> Self {
        Self {
            prompt: task.flattened(),
            params: Params::for_operation(task.operation()),
        }
    }
}
