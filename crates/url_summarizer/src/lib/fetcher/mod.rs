pub mod generic;
pub mod video;

use std::{fmt, future::Future};

use content_loader::{Document, FetchError, PageLoader, TranscriptApi};
use url::Url;

pub use generic::{GenericFetcher, BROWSER_USER_AGENT};
pub use video::VideoFetcher;

/// Retrieves the text behind a validated url
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Document, FetchError>> + Send;
}

/// Which retrieval strategy a url is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Video,
    WebPage,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Video => write!(f, "video"),
            SourceKind::WebPage => write!(f, "web_page"),
        }
    }
}

impl SourceKind {
    const VIDEO_DOMAIN: &str = "youtube.com";
    const SHORT_LINK_HOST: &str = "youtu.be";

    /// Routes on the parsed host: the video domain, any of its subdomains
    /// and the short link host are videos, everything else is a web page.
    pub fn detect(url: &Url) -> Self {
        let Some(host) = url.host_str() else {
            return SourceKind::WebPage;
        };
        let host = host.trim_end_matches('.').to_ascii_lowercase();

        let is_video_host = host == Self::VIDEO_DOMAIN
            || host.ends_with(&format!(".{}", Self::VIDEO_DOMAIN))
            || host == Self::SHORT_LINK_HOST;

        if is_video_host {
            SourceKind::Video
        } else {
            SourceKind::WebPage
        }
    }
}

/// Dispatches each url to the video or the generic page strategy
#[derive(Debug, Clone)]
pub struct ContentFetcher<T, P> {
    video: VideoFetcher<T>,
    generic: GenericFetcher<P>,
}

impl<T, P> ContentFetcher<T, P>
where
    T: TranscriptApi + Send + Sync,
    P: PageLoader + Send + Sync,
{
    pub fn new(transcript_api: T, page_loader: P) -> Self {
        Self {
            video: VideoFetcher::new(transcript_api),
            generic: GenericFetcher::new(page_loader),
        }
    }
}

impl<T, P> Fetcher for ContentFetcher<T, P>
where
    T: TranscriptApi + Send + Sync,
    P: PageLoader + Send + Sync,
{
    async fn fetch(&self, url: &Url) -> Result<Document, FetchError> {
        let kind = SourceKind::detect(url);
        tracing::info!(%kind, "Routing url");

        match kind {
            SourceKind::Video => self.video.fetch(url).await,
            SourceKind::WebPage => self.generic.fetch(url).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(url: &str) -> SourceKind {
        SourceKind::detect(&Url::parse(url).unwrap())
    }

    #[test]
    fn test_video_hosts() {
        assert_eq!(kind("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), SourceKind::Video);
        assert_eq!(kind("https://youtube.com/watch?v=dQw4w9WgXcQ"), SourceKind::Video);
        assert_eq!(kind("https://m.youtube.com/watch?v=dQw4w9WgXcQ"), SourceKind::Video);
        assert_eq!(kind("https://WWW.YouTube.com/watch?v=x"), SourceKind::Video);
        assert_eq!(kind("https://youtu.be/dQw4w9WgXcQ"), SourceKind::Video);
    }

    #[test]
    fn test_lookalike_hosts_are_web_pages() {
        assert_eq!(kind("https://notyoutube.com/watch?v=x"), SourceKind::WebPage);
        assert_eq!(kind("https://youtube.com.evil.example/watch?v=x"), SourceKind::WebPage);
        assert_eq!(
            kind("https://example.com/redirect?to=youtube.com/watch?v=x"),
            SourceKind::WebPage
        );
    }
}
