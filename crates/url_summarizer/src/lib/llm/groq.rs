use reqwest::Client;
use serde::Deserialize;

use crate::{error::LlmError, validator::Credential, Summarizer, Summary};

/// Chat completions client for Groq's OpenAI compatible api
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    base_url: String,
    model: String,
}

impl Default for GroqClient {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

impl GroqClient {
    pub const BASE_URL: &str = "https://api.groq.com/openai/v1";
    pub const DEFAULT_MODEL: &str = "gemma2-9b-It";
    const TEMPERATURE: f32 = 0.7;

    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: Self::BASE_URL.into(),
            model: Self::DEFAULT_MODEL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub async fn send_completion_request(
        &self,
        api_key: &str,
        user_content: impl Into<String>,
    ) -> Result<CompletionResponse, LlmError> {
        let body = serde_json::json!({
            "model": self.model,
            "temperature": Self::TEMPERATURE,
            "messages": [
                {
                    "role": "user",
                    "content": user_content.into()
                }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl Summarizer for GroqClient {
    fn model(&self) -> &str {
        &self.model
    }

    #[tracing::instrument(skip_all, fields(model = %self.model, prompt_chars = prompt.len()))]
    async fn summarize(&self, credential: &Credential, prompt: &str) -> Result<Summary, LlmError> {
        let response = self
            .send_completion_request(credential.expose(), prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(LlmError::EmptyResponse)?;

        Ok(Summary { text })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    fn client(server: &MockServer) -> GroqClient {
        GroqClient::default().with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_summary_returned_from_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer gsk_test"))
            .and(body_partial_json(serde_json::json!({
                "model": "gemma2-9b-It",
                "messages": [{ "role": "user", "content": "summarize me" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "chatcmpl-1",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": "A short summary." },
                    "finish_reason": "stop"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let summary = client(&server)
            .summarize(&Credential::new("gsk_test"), "summarize me")
            .await
            .expect("summary");

        assert_eq!(summary.text, "A short summary.");
    }

    #[tokio::test]
    async fn test_configured_model_is_sent() {
        let server = MockServer::start().await;
        Mock::given(body_partial_json(serde_json::json!({ "model": "llama-3.1-8b-instant" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "chatcmpl-2",
                "choices": [{ "index": 0, "message": { "role": "assistant", "content": "ok" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server).with_model("llama-3.1-8b-instant");
        assert_eq!(client.model(), "llama-3.1-8b-instant");

        let summary = client
            .summarize(&Credential::new("gsk_test"), "prompt")
            .await
            .unwrap();
        assert_eq!(summary.text, "ok");
    }

    #[tokio::test]
    async fn test_api_error_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API Key"))
            .mount(&server)
            .await;

        let result = client(&server)
            .summarize(&Credential::new("bad"), "prompt")
            .await;

        match result {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API Key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "id": "chatcmpl-3", "choices": [] })),
            )
            .mount(&server)
            .await;

        let result = client(&server)
            .summarize(&Credential::new("gsk_test"), "prompt")
            .await;

        assert!(matches!(result, Err(LlmError::EmptyResponse)));
    }
}
