use std::sync::{Arc, Mutex};

use content_loader::{FetchError, TranscriptApi, TranscriptSegment};

#[derive(Clone)]
pub struct MockTranscriptApi {
    pub segments: Vec<TranscriptSegment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl MockTranscriptApi {
    pub fn new(texts: &[&str]) -> Self {
        let segments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| TranscriptSegment::new(*text, i as f64, 1.0))
            .collect();

        Self {
            segments,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(&[])
        }
    }
}

impl TranscriptApi for MockTranscriptApi {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, FetchError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if self.fail {
            return Err(FetchError::TranscriptsDisabled(video_id.to_string()));
        }
        Ok(self.segments.clone())
    }
}
