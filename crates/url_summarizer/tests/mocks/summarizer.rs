use std::sync::{Arc, Mutex};

use url_summarizer::{Credential, LlmError, Summarizer, Summary};

#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<(Credential, String)>>>,
    pub fail_with: Option<(u16, String)>,
}

impl MockSummarizer {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(status: u16, msg: &str) -> Self {
        Self {
            fail_with: Some((status, msg.to_string())),
            ..Self::new("")
        }
    }
}

impl Summarizer for MockSummarizer {
    const CONTEXT_WINDOW_LIMIT: usize = 128_000;

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn summarize(&self, credential: &Credential, prompt: &str) -> Result<Summary, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((credential.clone(), prompt.to_string()));
        if let Some((status, message)) = &self.fail_with {
            return Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            });
        }
        Ok(Summary {
            text: self.summary.clone(),
        })
    }
}
