use content_loader::{Document, FetchError, LoadRequest, PageLoader};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use url::Url;

use crate::fetcher::Fetcher;

/// Sites commonly refuse non-browser agents
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_5_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36";

/// Summarizable text of any other url: the page's readable text
#[derive(Debug, Clone)]
pub struct GenericFetcher<P> {
    loader: P,
}

impl<P> GenericFetcher<P> {
    pub fn new(loader: P) -> Self {
        Self { loader }
    }

    fn load_request(url: &Url) -> LoadRequest {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

        LoadRequest {
            url: url.clone(),
            headers,
            verify_tls: false,
        }
    }
}

impl<P: PageLoader + Send + Sync> Fetcher for GenericFetcher<P> {
    #[tracing::instrument(skip(self, url), fields(%url))]
    async fn fetch(&self, url: &Url) -> Result<Document, FetchError> {
        let request = Self::load_request(url);

        let blocks = self
            .loader
            .load(&request)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to load page"))?;

        Ok(Document::from_blocks(&blocks))
    }
}
