//! Prompt text shared by every backend.
//!
//! Each call carries the same semantic instruction. Backends differ only
//! in how they package it: chat backends split it into a system and a
//! user message, completion backends flatten it into one prompt, and the
//! hosted default passes the schema structurally and sends its own
//! wording of the instruction.

use crate::{Operation, PathHistoryItem, schema};
use serde_json::Value;

/// The eight fixed world-building questions asked on the branching steps.
pub const FIXED_QUESTIONS: [&str; 8] = [
    "What is the overall atmosphere that characterizes this world?",
    "What is the general tone or feel of this world?",
    "What is the theme or level of technology of this world?",
    "What aspect of the geography of this world is unique?",
    "What is an unique or interesting society or social norm of this world?",
    "Who (or what) holds the most power or control in this world?",
    "What is the type of non-mundane power that people hope or grasp for in this world?",
    "What is the central conflict or major threat of this world?",
];

const CREATIVE_PARTNER: &str = "You are a creative partner in a game world generator.";
const WORLD_BUILDER: &str = "You are an expert world-builder.";
const HOSTED_PREAMBLE: &str =
    "You are a creative partner in a collaborative game world scenario generator.";

const BRANCHING: &str = "For each of the following 8 questions about a game world, generate exactly 8 pairs of antithetical (opposing) choices. The choices should be concise and potent (e.g., 'Ancient Magic' vs 'Cold Logic'). Do NOT include adjective openers or conversational phrasing. Return a single JSON array containing 8 objects. Each object must contain the original 'questionTemplate' and an 'options' array of the 8 pairs you generated.";

const KEYED_SECTIONS: &str = "ciety, economy, aesthetics, atmosphere, tone, technology, geography, Non-mundane abilities or powers used by individuals, major conflicts, any other sections that make sense in the context, any other sections that make sense in the context";
const HOSTED_SECTIONS: &str = "society, economy, aesthetics, atmosphere, tone, technology, geography, Non-mundane abilities or powers used by individuals, major conflicts, any other sections that make sense in the context";

/// Which phrasing of the instructions a backend receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wording {
    /// The phrasing sent to the user-key backends.
    Keyed,
    /// The phrasing sent to the hosted default.
    Hosted,
}

/// The instruction for one call, ready to be packaged by a backend.
#[derive(Debug, Clone)]
pub struct Task {
    operation: Operation,
    role: &'static str,
    instruction: String,
    questions: Option<String>,
    schema: Value,
}

impl Task {
    /// Ask for the eight branching questions.
    pub fn branching(wording: Wording) -> Self {
        let instruction = match wording {
            Wording::Keyed => BRANCHING.to_owned(),
            Wording::Hosted => format!("{HOSTED_PREAMBLE} {BRANCHING}"),
        };
        Self {
            operation: Operation::Branching,
            role: CREATIVE_PARTNER,
            instruction,
            questions: Some(numbered_questions()),
            schema: schema::branching(),
        }
    }

    /// Ask for two follow-up questions given the path so far.
    pub fn refinement(path: &[PathHistoryItem], wording: Wording) -> Self {
        let probe = match wording {
            Wording::Keyed => "interesting details",
            Wording::Hosted => "created and unexpected or interesting details",
        };
        let instruction = format!(
            "Based on the user's path so far: {}. Review these choices to understand the world being built. Now, generate 2 creative and fun follow-up questions to ask the user. These questions should probe for {probe} that would add unique flavor to the world. For each of the 2 questions, provide exactly 4 distinct, concise options for the user to choose from. Return a JSON array of 2 objects. Each object must contain 'questionTemplate' and an array of 4 string 'options'.",
            history(path)
        );
        Self {
            operation: Operation::Refinement,
            role: CREATIVE_PARTNER,
            instruction,
            questions: None,
            schema: schema::refinement(),
        }
    }

    /// Ask for the final scenario given the completed path.
    pub fn scenario(path: &[PathHistoryItem], wording: Wording) -> Self {
        let sections = match wording {
            Wording::Keyed => KEYED_SECTIONS,
            Wording::Hosted => HOSTED_SECTIONS,
        };
        let instruction = format!(
            "Based on the user's completed 10-step journey: {}. Your task is to creatively generate a nested JSON object with an idea for a game world scenario. This JSON will be used by an LLM, so it can have abbreviated information but must be well-structured. The JSON object must work in the details of the questions on the journey and additionally include information on: {sections}, and key_locations (an array of at least 3 interesting and named places). If any information is missing from the original prompt, creatively invent details that fit the established path. Finally, provide a two-sentence, evocative summary of the world. Return the result in a JSON format matching the provided schema.",
            narrative(path)
        );
        Self {
            operation: Operation::Scenario,
            role: WORLD_BUILDER,
            instruction,
            questions: None,
            schema: schema::scenario(),
        }
    }

    /// The call this task belongs to.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The response schema.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// System message for chat backends: the role plus the compact schema.
    pub fn system(&self) -> String {
        format!(
            "{} You MUST respond with a valid JSON object that adheres to this schema: {}",
            self.role, self.schema
        )
    }

    /// The instruction on its own: the user message for chat backends and
    /// the whole prompt for the hosted default.
    pub fn user(&self) -> String {
        match &self.questions {
            Some(questions) => format!("{} Questions:\n{questions}", self.instruction),
            None => self.instruction.clone(),
        }
    }

    /// Role, schema, and instruction flattened into a single prompt for
    /// completion-style backends.
    pub fn flattened(&self) -> String {
        let head = format!(
            "{} You MUST respond with a single, valid JSON object that adheres to this schema: {}. Do not include any other text, explanations, or markdown formatting outside of the JSON object.",
            self.role, self.schema
        );
        match &self.questions {
            Some(questions) => format!(
                "{head}\n    \n    Task: {}\n    \n    Questions:\n{questions}",
                self.instruction
            ),
            None => format!("{head}\n\n    Task: {}", self.instruction),
        }
    }
}

/// The fixed questions as a numbered list, one per line.
pub fn numbered_questions() -> String {
    FIXED_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {q}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The path as a comma-separated list of `(Q: .. -> A: ..)` entries.
pub fn history(path: &[PathHistoryItem]) -> String {
    path.iter()
        .map(|p| format!("(Q: {} -> A: {})", p.question, p.choice))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The path as one sentence per step.
pub fn narrative(path: &[PathHistoryItem]) -> String {
    path.iter()
        .map(|p| format!("For the question \"{}\", my choice was \"{}\"", p.question, p.choice))
        .collect::<Vec<_>>()
        .join(". ")
}
