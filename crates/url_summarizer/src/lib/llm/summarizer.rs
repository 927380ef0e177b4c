use std::future::Future;

use serde::Serialize;

use crate::{error::LlmError, validator::Credential};

pub trait Summarizer {
    /// Rough prompt budget in tokens; prompts are never cut to fit it
    const CONTEXT_WINDOW_LIMIT: usize = 8_192;

    fn model(&self) -> &str;

    fn summarize(
        &self,
        credential: &Credential,
        prompt: &str,
    ) -> impl Future<Output = Result<Summary, LlmError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub text: String,
}
