use content_loader::{Document, FetchError, TranscriptApi};
use url::Url;

use crate::fetcher::Fetcher;

/// Summarizable text of a video: its transcript
#[derive(Debug, Clone)]
pub struct VideoFetcher<T> {
    transcript_api: T,
}

impl<T> VideoFetcher<T> {
    pub fn new(transcript_api: T) -> Self {
        Self { transcript_api }
    }
}

/// Reads the video id from the `v` query parameter.
///
/// Short links (`youtu.be/<id>`) and urls without a `v` parameter are
/// rejected rather than guessed at.
pub fn extract_video_id(url: &Url) -> Result<String, FetchError> {
    if url.host_str() == Some("youtu.be") {
        return Err(FetchError::UnsupportedVideoUrl(format!(
            "shortened links are not supported: {url}"
        )));
    }

    url.query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            FetchError::UnsupportedVideoUrl(format!("no video id in query string: {url}"))
        })
}

impl<T: TranscriptApi + Send + Sync> Fetcher for VideoFetcher<T> {
    #[tracing::instrument(skip(self, url), fields(%url))]
    async fn fetch(&self, url: &Url) -> Result<Document, FetchError> {
        let video_id = extract_video_id(url)
            .inspect_err(|e| tracing::error!(error = %e, "Failed to extract video id"))?;

        let segments = self
            .transcript_api
            .fetch_transcript(&video_id)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch transcript"))?;

        Ok(Document::from_segments(&segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_id(url: &str) -> Result<String, FetchError> {
        extract_video_id(&Url::parse(url).unwrap())
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_extra_query_params_ignored() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=120").unwrap(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_short_link_unsupported() {
        assert!(matches!(
            video_id("https://youtu.be/dQw4w9WgXcQ"),
            Err(FetchError::UnsupportedVideoUrl(_))
        ));
    }

    #[test]
    fn test_missing_or_empty_id_unsupported() {
        for url in [
            "https://www.youtube.com/@rustlang/videos",
            "https://www.youtube.com/watch?v=",
            "https://www.youtube.com/watch?list=PL123",
        ] {
            assert!(
                matches!(video_id(url), Err(FetchError::UnsupportedVideoUrl(_))),
                "{url}"
            );
        }
    }
}
