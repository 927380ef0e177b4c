use content_loader::FetchError;

use crate::pipeline::Stage;

/// Rejected user input, detected before any network activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please provide the information to get started")]
    MissingCredentialOrUrl,
    #[error("Please enter a valid URL. It can be a YouTube video URL or a website URL")]
    InvalidUrlSyntax,
}

/// Failure of the remote language model call
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No content in completion response")]
    EmptyResponse,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Failed to fetch content: {0}")]
    Fetch(#[from] FetchError),
    #[error("Failed to summarize content: {0}")]
    Llm(#[from] LlmError),
}

impl PipelineError {
    /// The stage the pipeline was in when it failed
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Input(_) => Stage::Validating,
            PipelineError::Fetch(_) => Stage::Fetching,
            PipelineError::Llm(_) => Stage::Summarizing,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Input(_) => "input",
            PipelineError::Fetch(_) => "fetch",
            PipelineError::Llm(_) => "llm",
        }
    }

    /// Message shown to the user. Fetch and model failures share one
    /// generic exception display.
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::Input(e) => e.to_string(),
            other => format!("Exception: {other}"),
        }
    }
}
