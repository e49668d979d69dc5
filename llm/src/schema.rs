//! Response schemas for the three calls.
//!
//! Written in Gemini's structured-output dialect (`"OBJECT"`, `"ARRAY"`,
//! `"STRING"`). Gemini receives them as `responseSchema`; the other
//! backends get the compact serialization embedded in their prompt.
//! Key order is significant for the latter and is preserved on
//! serialization.

use serde_json::{Value, json};

/// Schema for the final scenario object.
pub fn scenario() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A two-sentence, evocative summary of the game world scenario that was created.",
            },
            "scenarioJson": {
                "type": "STRING",
                "description": "A string containing a nested JSON object for a game world scenario. This JSON should contain information on ciety, economy, aesthetics, atmosphere, tone, technology, geography, Non-mundane abilities or powers used by individuals, major conflicts, any other sections that make sense in the context, and key_locations (an array of at least 3 interesting and named places), incorporating details from the user's journey. If any information is missing from the original prompt, creatively make something up. The JSON should be well-structured and abbreviated where necessary for LLM use.",
            },
        },
        "required": ["summary", "scenarioJson"],
    })
}

/// Schema for the eight branching questions.
pub fn branching() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "questionTemplate": { "type": "STRING", "description": "The original question template provided." },
                "options": {
                    "type": "ARRAY",
                    "description": "An array of exactly 8 antithetical (opposing) choice pairs.",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "positive": { "type": "STRING", "description": "The first concept in a pair (e.g., 'Ancient Magic')." },
                            "negative": { "type": "STRING", "description": "The opposing concept (e.g., 'Cold Logic')." },
                        },
                        "required": ["positive", "negative"],
                    },
                },
            },
            "required": ["questionTemplate", "options"],
        },
    })
}

/// Schema for the follow-up questions.
pub fn refinement() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "questionTemplate": { "type": "STRING", "description": "A creative follow-up question for the user." },
                "options": {
                    "type": "ARRAY",
                    "description": "An array of exactly 4 distinct and concise string options for the user to choose from.",
                    "items": { "type": "STRING" },
                },
            },
            "required": ["questionTemplate", "options"],
        },
    })
}

#[cfg(test)]
mod tests {
    #[test]
    fn compact_form_keeps_declaration_order() {
        let text = super::refinement().to_string();
        assert!(text.starts_with(r#"{"type":"ARRAY","items":{"type":"OBJECT","properties":{"questionTemplate":"#));
        assert!(text.ends_with(r#""required":["questionTemplate","options"]}}"#));
    }
}
