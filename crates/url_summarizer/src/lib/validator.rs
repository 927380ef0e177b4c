use std::fmt;

use serde::Deserialize;
use url::Url;

use crate::error::InputError;

/// API credential supplied per session; never logged
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Credential(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Raw input of a single summarize action
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct SummarizeRequest {
    pub credential: String,
    pub url: String,
}

impl SummarizeRequest {
    pub fn new(credential: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            url: url.into(),
        }
    }
}

impl fmt::Debug for SummarizeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummarizeRequest")
            .field("credential", &"***")
            .field("url", &self.url)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub credential: Credential,
    pub url: Url,
}

/// Checks presence of both fields first, then the url syntax.
/// Never touches the network.
pub fn validate(request: &SummarizeRequest) -> Result<ValidatedRequest, InputError> {
    let credential = request.credential.trim();
    let url = request.url.trim();

    if credential.is_empty() || url.is_empty() {
        return Err(InputError::MissingCredentialOrUrl);
    }

    let url = parse_web_url(url).ok_or(InputError::InvalidUrlSyntax)?;

    Ok(ValidatedRequest {
        credential: Credential::new(credential),
        url,
    })
}

fn parse_web_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;

    let has_host = url.host_str().is_some_and(|h| !h.is_empty());
    let is_web = matches!(url.scheme(), "http" | "https");

    (has_host && is_web).then_some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields() {
        for (credential, url) in [
            ("", "https://example.com"),
            ("gsk_key", ""),
            ("   ", "https://example.com"),
            ("gsk_key", " \t\n"),
            ("", ""),
        ] {
            assert_eq!(
                validate(&SummarizeRequest::new(credential, url)).unwrap_err(),
                InputError::MissingCredentialOrUrl,
                "credential={credential:?} url={url:?}"
            );
        }
    }

    #[test]
    fn test_emptiness_checked_before_syntax() {
        let err = validate(&SummarizeRequest::new("", "not a url")).unwrap_err();
        assert_eq!(err, InputError::MissingCredentialOrUrl);
    }

    #[test]
    fn test_invalid_url_syntax() {
        for url in [
            "not a url",
            "example.com",
            "ftp://example.com/file",
            "mailto:someone@example.com",
            "https://",
        ] {
            assert_eq!(
                validate(&SummarizeRequest::new("gsk_key", url)).unwrap_err(),
                InputError::InvalidUrlSyntax,
                "url={url:?}"
            );
        }
    }

    #[test]
    fn test_valid_request_is_trimmed() {
        let validated =
            validate(&SummarizeRequest::new(" gsk_key ", " https://example.com/post?id=1 "))
                .expect("request should be valid");

        assert_eq!(validated.credential.expose(), "gsk_key");
        assert_eq!(validated.url.as_str(), "https://example.com/post?id=1");
    }

    #[test]
    fn test_credential_redacted_in_debug() {
        let request = SummarizeRequest::new("gsk_secret", "https://example.com");
        let debug = format!("{request:?}");
        assert!(!debug.contains("gsk_secret"));
        assert!(!format!("{:?}", Credential::new("gsk_secret")).contains("gsk_secret"));
    }
}
