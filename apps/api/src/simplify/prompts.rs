// Prompt constants for text simplification.
// The JSON structure described in SIMPLIFY_SYSTEM must match
// models::simplified::response_schema().

/// System instruction for every simplification request.
pub const SIMPLIFY_SYSTEM: &str = r#"You are an AI Accessibility Specialist. Your goal is to take complex, jargon-heavy text (legal, medical, or bureaucratic) and rewrite it so a 10-year-old or someone with low digital literacy can understand it perfectly.

CRITICAL RULES:
1. Use simple language. Avoid big words unless they are 'unavoidable'.
2. Define any 'unavoidable' big words in parentheses immediately after the word.
3. Maintain a helpful, kind, and non-condescending tone.
4. Provide the response in a structured JSON format.

JSON Structure:
{
  "summary": "A very brief 1-2 sentence overview of the main message.",
  "keyPoints": ["List of main facts in simple bullet points, most important first"],
  "whatItMeans": "A clear explanation of how this affects the person directly, speaking to them as 'you'.",
  "whatToDo": ["Clear, numbered steps of what the person should do next, in order"],
  "definitions": [{"word": "the word", "meaning": "the simple meaning"}]
}"#;

/// Prefix placed before the caller's text in the user turn.
pub const SIMPLIFY_PROMPT_PREFIX: &str = "Simplify the following text:";

/// Builds the user-turn prompt. `text` is embedded verbatim.
pub fn build_simplify_prompt(text: &str) -> String {
    format!("{SIMPLIFY_PROMPT_PREFIX}\n\n{text}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::simplified::FIELD_NAMES;

    #[test]
    fn test_system_prompt_names_persona() {
        assert!(SIMPLIFY_SYSTEM.contains("AI Accessibility Specialist"));
    }

    #[test]
    fn test_system_prompt_describes_every_result_field() {
        for field in FIELD_NAMES {
            assert!(
                SIMPLIFY_SYSTEM.contains(&format!("\"{field}\"")),
                "system prompt does not describe `{field}`"
            );
        }
    }

    #[test]
    fn test_prompt_embeds_text_verbatim_after_prefix() {
        let text = "  The Lessee shall indemnify\n\tthe Lessor.  ";
        let prompt = build_simplify_prompt(text);
        assert_eq!(prompt, format!("Simplify the following text:\n\n{text}"));
        assert!(prompt.ends_with(text));
    }
}
