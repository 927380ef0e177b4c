pub mod parser;
pub mod types;

use std::future::Future;

use reqwest::Client;

use crate::{
    youtube::parser::{parse_caption_payload, select_track, YtWatchPage},
    FetchError, TranscriptSegment,
};

/// Source of video transcripts keyed by video id
pub trait TranscriptApi {
    fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<Vec<TranscriptSegment>, FetchError>> + Send;
}

impl<T: TranscriptApi + Send + Sync> TranscriptApi for &T {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, FetchError> {
        (**self).fetch_transcript(video_id).await
    }
}

/// Reads caption tracks straight off YouTube watch pages
#[derive(Debug, Clone)]
pub struct YtTranscriptApi {
    client: Client,
    base_url: String,
    languages: Vec<String>,
}

impl Default for YtTranscriptApi {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

impl YtTranscriptApi {
    const BASE_URL: &str = "https://www.youtube.com";

    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: Self::BASE_URL.into(),
            languages: vec!["en".into()],
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Preferred transcript languages, most preferred first
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Loads the watch page html of `video_id`
    #[tracing::instrument(skip(self))]
    async fn fetch_watch_page(&self, video_id: &str) -> Result<YtWatchPage, FetchError> {
        let page = self
            .client
            .get(format!("{}/watch", self.base_url))
            .query(&[("v", video_id)])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to load watch page"))?
            .error_for_status()?
            .text()
            .await?;

        Ok(page.into())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_caption_payload(&self, base_url: &str) -> Result<String, FetchError> {
        // srv3 uses a different element layout than the default timedtext format
        let url = base_url.replace("&fmt=srv3", "");

        let payload = self
            .client
            .get(url)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to load caption track"))?
            .error_for_status()?
            .text()
            .await?;

        Ok(payload)
    }
}

impl TranscriptApi for YtTranscriptApi {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, FetchError> {
        let page = self.fetch_watch_page(video_id).await?;
        let tracks = page
            .caption_tracks(video_id)
            .inspect_err(|e| tracing::error!(error = %e, "No usable caption tracks"))?;

        let track = select_track(&tracks, &self.languages).ok_or_else(|| {
            FetchError::NoTranscriptFound {
                video_id: video_id.to_string(),
                requested: self.languages.clone(),
                available: tracks.iter().map(|t| t.language_code.clone()).collect(),
            }
        })?;

        tracing::debug!(
            language = %track.language_code,
            generated = track.is_generated(),
            "Selected caption track"
        );

        let payload = self.fetch_caption_payload(&track.base_url).await?;
        let segments = parse_caption_payload(&payload);
        tracing::info!(video_id, count = segments.len(), "Fetched transcript");

        Ok(segments)
    }
}
