//! OpenAI chat completions backend

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::OpenAiConfig;
use crate::error::GenerationError;
use crate::ports::{CompletionBackend, CompletionRequest};

/// Completion backend for the OpenAI chat completions API
pub struct OpenAiBackend {
    client: Client,
    config: OpenAiConfig,
}

impl std::fmt::Debug for OpenAiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiBackend")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OpenAiBackend {
    /// Create a new OpenAI backend
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenAiConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Extract the completion text from a chat completions response
    fn parse_completion(body: ChatCompletionResponse) -> Result<String, GenerationError> {
        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::InvalidResponse("No choices in response".to_string()))?;

        let content = choice.message.content.ok_or_else(|| {
            GenerationError::InvalidResponse("No content in completion".to_string())
        })?;

        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    fn name(&self) -> &'static str {
        "openai"
    }

    #[instrument(skip(self, request), fields(model = %self.config.model))]
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError> {
        let Some(api_key) = self.config.api_key.as_ref() else {
            return Err(GenerationError::NotConfigured(
                "OpenAI API key not configured".to_string(),
            ));
        };

        let payload = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: request.user_prompt,
                },
            ],
        };

        debug!("Sending chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(api_key.expose_secret())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Chat completion request failed");
            return Err(GenerationError::RequestFailed(format!(
                "HTTP {status}: {body}"
            )));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let completion = Self::parse_completion(body)?;
        debug!(chars = completion.len(), "Chat completion received");
        Ok(completion)
    }
}

/// Chat completions request payload
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Chat completions response payload
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_completion_returns_trimmed_text() {
        let body: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "  1) Visit the park\n"}}]}"#,
        )
        .unwrap();

        let text = OpenAiBackend::parse_completion(body).unwrap();
        assert_eq!(text, "1) Visit the park");
    }

    #[test]
    fn parse_completion_without_choices_is_invalid() {
        let body: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        let err = OpenAiBackend::parse_completion(body).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidResponse(_)));
    }

    #[test]
    fn parse_completion_without_content_is_invalid() {
        let body: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"role": "assistant"}}]}"#).unwrap();
        let err = OpenAiBackend::parse_completion(body).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidResponse(_)));
    }

    #[test]
    fn backend_name() {
        let backend = OpenAiBackend::new(OpenAiConfig::default()).unwrap();
        assert_eq!(backend.name(), "openai");
    }

    #[tokio::test]
    async fn missing_api_key_is_not_configured() {
        let backend = OpenAiBackend::new(OpenAiConfig::default()).unwrap();
        let err = backend
            .complete(CompletionRequest::new("system", "user"))
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::NotConfigured(_)));
        assert_eq!(err.to_string(), "OpenAI API key not configured");
    }

    #[test]
    fn debug_does_not_leak_key() {
        let backend = OpenAiBackend::new(OpenAiConfig::for_testing("http://localhost:1")).unwrap();
        let debug = format!("{backend:?}");
        assert!(!debug.contains("test-key"));
    }
}
