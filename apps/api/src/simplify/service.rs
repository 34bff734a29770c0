//! Simplification Service: turns free-form text into a `SimplifiedResult`
//! with exactly one provider call.
//!
//! Every failure below this boundary (transport, provider status, auth, malformed
//! or partial body) is logged and collapsed into `SimplificationError`.

use std::sync::Arc;

use tracing::{error, info};

use crate::errors::SimplificationError;
use crate::llm_client::{
    Content, GenerateContentRequest, GenerationConfig, LlmError, Part, TextGenerator,
};
use crate::models::{response_schema, SimplifiedResult};
use crate::simplify::prompts::{build_simplify_prompt, SIMPLIFY_SYSTEM};

const RESPONSE_MIME_TYPE: &str = "application/json";

/// Stateless and reentrant; clone freely. Concurrent calls are independent.
#[derive(Clone)]
pub struct SimplifyService {
    generator: Arc<dyn TextGenerator>,
}

impl SimplifyService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Simplifies `text`. Empty input is the caller's concern; it is forwarded as-is.
    pub async fn simplify(&self, text: &str) -> Result<SimplifiedResult, SimplificationError> {
        info!("Simplifying text ({} chars)", text.chars().count());

        match self.try_simplify(text).await {
            Ok(result) => Ok(result),
            Err(e) => {
                error!("Simplification failed: {e}");
                Err(SimplificationError)
            }
        }
    }

    async fn try_simplify(&self, text: &str) -> Result<SimplifiedResult, LlmError> {
        let request = build_simplify_request(text);
        let body = self.generator.generate(&request).await?;
        parse_result(body.as_deref())
    }
}

/// Assembles the provider request: fixed system instruction, one user turn,
/// JSON output constrained to the result schema.
pub fn build_simplify_request(text: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part::text(SIMPLIFY_SYSTEM)],
        },
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part::text(build_simplify_prompt(text))],
        }],
        generation_config: GenerationConfig {
            response_mime_type: RESPONSE_MIME_TYPE.to_string(),
            response_schema: response_schema(),
        },
    }
}

/// Absent or empty provider text parses as `{}`, which then fails on the
/// missing fields rather than on the absence itself.
fn parse_result(text: Option<&str>) -> Result<SimplifiedResult, LlmError> {
    let text = text.filter(|t| !t.is_empty()).unwrap_or("{}");
    Ok(serde_json::from_str(text)?)
}
