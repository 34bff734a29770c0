//! In-memory `TextGenerator` for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{GenerateContentRequest, LlmError, TextGenerator};

/// What the mock answers with on every call.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(Option<String>),
    ApiError { status: u16, message: String },
}

pub struct MockGenerator {
    reply: MockReply,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerateContentRequest>>,
}

impl MockGenerator {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn returning(body: &str) -> Self {
        Self::new(MockReply::Text(Some(body.to_string())))
    }

    pub fn returning_nothing() -> Self {
        Self::new(MockReply::Text(None))
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self::new(MockReply::ApiError {
            status,
            message: message.to_string(),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerateContentRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<Option<String>, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::ApiError { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
