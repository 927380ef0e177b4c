pub mod extract;

use std::{future::Future, time::Duration};

use reqwest::{
    header::{HeaderMap, CONTENT_TYPE},
    Client,
};
use url::Url;

use crate::{page::extract::extract_text_blocks, FetchError};

/// A single page load: target, extra request headers and TLS policy
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub url: Url,
    pub headers: HeaderMap,
    pub verify_tls: bool,
}

/// Loads a web page and returns its text segments
pub trait PageLoader {
    fn load(
        &self,
        request: &LoadRequest,
    ) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send;
}

impl<P: PageLoader + Send + Sync> PageLoader for &P {
    async fn load(&self, request: &LoadRequest) -> Result<Vec<String>, FetchError> {
        (**self).load(request).await
    }
}

#[derive(Debug, Clone)]
pub struct HtmlPageLoader {
    timeout: Duration,
}

impl Default for HtmlPageLoader {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl HtmlPageLoader {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// A fresh client per request since the TLS policy is per request
    fn client_for(&self, request: &LoadRequest) -> Result<Client, FetchError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!request.verify_tls)
            .default_headers(request.headers.clone())
            .timeout(self.timeout)
            .build()?;

        Ok(client)
    }
}

impl PageLoader for HtmlPageLoader {
    #[tracing::instrument(skip(self, request), fields(url = %request.url, verify_tls = request.verify_tls))]
    async fn load(&self, request: &LoadRequest) -> Result<Vec<String>, FetchError> {
        let resp = self
            .client_for(request)?
            .get(request.url.clone())
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?
            .error_for_status()
            .inspect_err(|e| tracing::error!(error = %e, "Page responded with an error status"))?;

        let is_plain_text = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/plain"));
        let final_url = resp.url().clone();
        let body = resp.text().await?;

        let blocks = if is_plain_text {
            let text = body.trim();
            if text.is_empty() {
                vec![]
            } else {
                vec![text.to_string()]
            }
        } else {
            extract_text_blocks(&body)
        };

        if blocks.is_empty() {
            return Err(FetchError::EmptyDocument(final_url.to_string()));
        }

        tracing::info!(%final_url, count = blocks.len(), "Extracted page text");
        Ok(blocks)
    }
}
