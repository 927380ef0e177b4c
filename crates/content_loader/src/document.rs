use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Plain text retrieved for a single request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Document { text: text.into() }
    }

    /// Joins transcript segment texts with single spaces
    pub fn from_segments(segments: &[TranscriptSegment]) -> Self {
        Document {
            text: segments.iter().map(|s| s.text.as_str()).join(" "),
        }
    }

    /// Joins page text blocks with blank lines
    pub fn from_blocks<S: AsRef<str>>(blocks: &[S]) -> Self {
        Document {
            text: blocks.iter().map(AsRef::as_ref).join("\n\n"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A single captioned line of a video transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}
