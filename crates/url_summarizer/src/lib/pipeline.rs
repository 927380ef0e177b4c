pub mod builder;

use std::fmt;

use content_loader::FetchError;

use crate::{
    error::PipelineError,
    fetcher::Fetcher,
    prompt::build_prompt,
    validator::{validate, SummarizeRequest},
    Summarizer, Summary,
};

/// Steps a single summarize action moves through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Fetching,
    Summarizing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Validating => write!(f, "validating"),
            Stage::Fetching => write!(f, "fetching"),
            Stage::Summarizing => write!(f, "summarizing"),
        }
    }
}

// Validate -> fetch -> prompt -> summarize, once per request
#[derive(Debug)]
pub struct SummaryPipeline<F, S>
where
    F: Fetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    fetcher: F,
    summarizer: S,
}

impl<F, S> SummaryPipeline<F, S>
where
    F: Fetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn new(fetcher: F, summarizer: S) -> Self {
        SummaryPipeline {
            fetcher,
            summarizer,
        }
    }

    /// Runs one request to completion. Invalid input short-circuits before
    /// any network call; nothing is retried.
    #[tracing::instrument(skip_all, fields(url = %request.url))]
    pub async fn run(&self, request: &SummarizeRequest) -> Result<Summary, PipelineError> {
        tracing::debug!(stage = %Stage::Validating, "Stage started");
        let request = validate(request)
            .inspect_err(|e| tracing::warn!(error = %e, "Rejected request"))?;

        tracing::debug!(stage = %Stage::Fetching, "Stage started");
        let document = self.fetcher.fetch(&request.url).await?;
        if document.is_empty() {
            tracing::warn!("Fetched document has no text");
            return Err(FetchError::EmptyDocument(request.url.to_string()).into());
        }

        let prompt = build_prompt(&document.text);
        let estimated_tokens = prompt.len() / 4;
        if estimated_tokens > S::CONTEXT_WINDOW_LIMIT {
            tracing::warn!(
                estimated_tokens,
                limit = S::CONTEXT_WINDOW_LIMIT,
                "Prompt likely exceeds the model context window"
            );
        }

        tracing::debug!(stage = %Stage::Summarizing, model = self.summarizer.model(), "Stage started");
        let summary = self
            .summarizer
            .summarize(&request.credential, &prompt)
            .await?;

        tracing::info!(summary_chars = summary.text.len(), "Summarized content");
        Ok(summary)
    }
}
