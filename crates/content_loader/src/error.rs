/// Failure while retrieving the content behind a URL
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unsupported video URL: {0}")]
    UnsupportedVideoUrl(String),
    #[error("Video {video_id} is unavailable: {reason}")]
    VideoUnavailable { video_id: String, reason: String },
    #[error("Transcripts are disabled for video {0}")]
    TranscriptsDisabled(String),
    #[error("No transcript found for video {video_id} in {requested:?} (available: {available:?})")]
    NoTranscriptFound {
        video_id: String,
        requested: Vec<String>,
        available: Vec<String>,
    },
    #[error("Parse error: {0}")]
    ParseError(&'static str),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No text could be extracted from {0}")]
    EmptyDocument(String),
}
