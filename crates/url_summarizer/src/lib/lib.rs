pub mod config;
mod error;
pub mod fetcher;
mod llm;
mod pipeline;
pub mod prompt;
pub mod tracing;
pub mod validator;
pub mod web;

pub use error::{InputError, LlmError, PipelineError};
pub use llm::groq;
pub use llm::summarizer::{Summarizer, Summary};
pub use pipeline::{builder::SummaryPipelineBuilder, Stage, SummaryPipeline};
pub use validator::{Credential, SummarizeRequest};
