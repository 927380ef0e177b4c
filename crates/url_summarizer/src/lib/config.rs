use std::time::Duration;

use content_loader::{HtmlPageLoader, YtTranscriptApi};

use crate::{
    fetcher::ContentFetcher, groq::GroqClient, SummaryPipeline,
    SummaryPipelineBuilder,
};

pub type DefaultFetcher = ContentFetcher<YtTranscriptApi, HtmlPageLoader>;
pub type DefaultPipeline = SummaryPipeline<DefaultFetcher, GroqClient>;

/// Settings shared by every request of a process
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub groq_base_url: String,
    pub model: String,
    pub request_timeout: Duration,
    pub transcript_languages: Vec<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            groq_base_url: GroqClient::BASE_URL.into(),
            model: GroqClient::DEFAULT_MODEL.into(),
            request_timeout: Duration::from_secs(120),
            transcript_languages: vec!["en".into()],
        }
    }
}

impl SummarizerConfig {
    /// Wires the production transcript api, page loader and model client
    pub fn build_pipeline(&self) -> Result<DefaultPipeline, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()?;

        let transcript_api = YtTranscriptApi::new(http_client.clone())
            .with_languages(self.transcript_languages.iter().cloned());
        let page_loader = HtmlPageLoader::new(self.request_timeout);

        let summarizer = GroqClient::new(http_client)
            .with_base_url(&self.groq_base_url)
            .with_model(&self.model);

        Ok(SummaryPipelineBuilder::new()
            .fetcher(ContentFetcher::new(transcript_api, page_loader))
            .summarizer(summarizer)
            .build())
    }
}
