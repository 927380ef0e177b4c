//! # Watch page & caption parser
//!
//! Pulls the `ytInitialPlayerResponse` object out of a YouTube watch page,
//! picks a caption track and turns the timedtext payload into
//! [`TranscriptSegment`]s.

use std::{ops::Deref, sync::LazyLock};

use regex::Regex;

use crate::{
    youtube::types::{CaptionTrack, PlayerResponse},
    FetchError, TranscriptSegment,
};

static PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\});\s*(?:var\s|</script>)")
        .unwrap()
});

static CAPTION_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<text\s+([^>/]*)>(.*?)</text>").unwrap());

static START_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"start="([^"]*)""#).unwrap());

static DUR_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"dur="([^"]*)""#).unwrap());

static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

pub struct YtWatchPage(String);

impl Deref for YtWatchPage {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<String> for YtWatchPage {
    fn from(value: String) -> Self {
        YtWatchPage(value)
    }
}

impl YtWatchPage {
    pub fn new(page: String) -> Self {
        YtWatchPage(page)
    }

    /// Extracts the `ytInitialPlayerResponse` script data
    pub fn player_response(&self) -> Result<PlayerResponse, FetchError> {
        let json = PLAYER_RESPONSE_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .ok_or(FetchError::ParseError(
                "Failed to extract ytInitialPlayerResponse from the watch page",
            ))?;

        Ok(serde_json::from_str(json.as_str())?)
    }

    /// Returns the caption tracks of a playable video.
    ///
    /// # Returns
    /// * `Err(FetchError::VideoUnavailable)` if the playability status is not `OK`
    /// * `Err(FetchError::TranscriptsDisabled)` if the video has no caption tracks
    pub fn caption_tracks(&self, video_id: &str) -> Result<Vec<CaptionTrack>, FetchError> {
        let response = self.player_response()?;

        if let Some(status) = response.playability_status {
            if status.status != "OK" {
                return Err(FetchError::VideoUnavailable {
                    video_id: video_id.to_string(),
                    reason: status.reason.unwrap_or(status.status),
                });
            }
        }

        let tracks = response
            .captions
            .and_then(|c| c.player_captions_tracklist_renderer)
            .map(|r| r.caption_tracks)
            .unwrap_or_default();

        if tracks.is_empty() {
            return Err(FetchError::TranscriptsDisabled(video_id.to_string()));
        }

        Ok(tracks)
    }
}

/// Picks the first track matching `languages` in order of preference.
/// For each language a manually created track wins over a generated one.
pub fn select_track<'a, S: AsRef<str>>(
    tracks: &'a [CaptionTrack],
    languages: &[S],
) -> Option<&'a CaptionTrack> {
    languages.iter().find_map(|lang| {
        let lang = lang.as_ref();
        let mut candidates = tracks.iter().filter(|t| t.language_code == lang);
        let manual = candidates.clone().find(|t| !t.is_generated());
        manual.or_else(|| candidates.next())
    })
}

/// Parses a timedtext XML payload into transcript segments.
/// Entities are decoded, inline markup is stripped and empty lines dropped.
pub fn parse_caption_payload(payload: &str) -> Vec<TranscriptSegment> {
    CAPTION_TEXT_RE
        .captures_iter(payload)
        .filter_map(|cap| {
            let attrs = cap.get(1).map(|m| m.as_str()).unwrap_or_default();
            let raw = cap.get(2).map(|m| m.as_str()).unwrap_or_default();

            // payload is XML-escaped html, hence two rounds of decoding
            let xml_decoded = html_escape::decode_html_entities(raw);
            let html_decoded = html_escape::decode_html_entities(&xml_decoded);
            let text = MARKUP_RE.replace_all(&html_decoded, "").trim().to_string();

            if text.is_empty() {
                return None;
            }

            Some(TranscriptSegment {
                text,
                start: numeric_attr(&START_ATTR_RE, attrs),
                duration: numeric_attr(&DUR_ATTR_RE, attrs),
            })
        })
        .collect()
}

fn numeric_attr(re: &Regex, attrs: &str) -> f64 {
    re.captures(attrs)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or_default()
}
