//! The simplification result contract.
//!
//! `SimplifiedResult` is what the HTTP layer hands back to callers, and
//! `response_schema()` is the shape the provider is asked to generate. The two
//! must describe the same fields; the tests at the bottom of this file pin that.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Top-level field names, in the order they are declared on `SimplifiedResult`.
pub const FIELD_NAMES: [&str; 5] = [
    "summary",
    "keyPoints",
    "whatItMeans",
    "whatToDo",
    "definitions",
];

/// A plain-language rewrite of a dense source text.
///
/// Every field is required when deserializing. A provider body missing any of
/// them (or carrying `null` for an array) fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedResult {
    /// One or two sentences giving the main message.
    pub summary: String,
    /// Standalone simplified facts, most important first.
    pub key_points: Vec<String>,
    /// Second-person explanation of how the text affects the reader.
    pub what_it_means: String,
    /// Next steps, in the order they should be done.
    pub what_to_do: Vec<String>,
    /// Unavoidable jargon with plain meanings. May be empty; words may repeat.
    pub definitions: Vec<Definition>,
}

/// A single glossary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub word: String,
    pub meaning: String,
}

/// Structured-output schema sent to the provider with every request.
///
/// Uses the provider's OpenAPI subset (upper-case type names).
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "keyPoints": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "whatItMeans": { "type": "STRING" },
            "whatToDo": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "definitions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "word": { "type": "STRING" },
                        "meaning": { "type": "STRING" }
                    },
                    "required": ["word", "meaning"]
                }
            }
        },
        "required": FIELD_NAMES
    })
}
