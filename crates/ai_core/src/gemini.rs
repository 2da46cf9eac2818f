//! Gemini generateContent backend

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::GeminiConfig;
use crate::error::GenerationError;
use crate::ports::{CompletionBackend, CompletionRequest};

/// Completion backend for the Gemini generateContent API
pub struct GeminiBackend {
    client: Client,
    config: GeminiConfig,
}

impl std::fmt::Debug for GeminiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiBackend")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GeminiBackend {
    /// Create a new Gemini backend
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: GeminiConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Concatenate the text parts of the first candidate
    fn parse_completion(body: GenerateContentResponse) -> Result<String, GenerationError> {
        let candidate = body.candidates.into_iter().next().ok_or_else(|| {
            GenerationError::InvalidResponse("No candidates in response".to_string())
        })?;

        let content = candidate.content.ok_or_else(|| {
            GenerationError::InvalidResponse("No content in candidate".to_string())
        })?;

        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.trim().is_empty() {
            return Err(GenerationError::InvalidResponse(
                "Empty candidate text".to_string(),
            ));
        }

        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    fn name(&self) -> &'static str {
        "gemini"
    }

    #[instrument(skip(self, request), fields(model = %self.config.model))]
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError> {
        let Some(api_key) = self.config.api_key.as_ref() else {
            return Err(GenerationError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        };

        let payload = GenerateContentRequest {
            system_instruction: InstructionContent {
                parts: vec![TextPart {
                    text: request.system_instruction,
                }],
            },
            contents: vec![UserContent {
                role: "user",
                parts: vec![TextPart {
                    text: request.user_prompt,
                }],
            }],
        };

        // The key travels as a query parameter; the URL is never logged.
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        debug!("Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key.expose_secret())])
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "generateContent request failed");
            return Err(GenerationError::RequestFailed(format!(
                "HTTP {status}: {body}"
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let completion = Self::parse_completion(body)?;
        debug!(chars = completion.len(), "generateContent response received");
        Ok(completion)
    }
}

/// generateContent request payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: InstructionContent,
    contents: Vec<UserContent>,
}

#[derive(Debug, Serialize)]
struct InstructionContent {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct UserContent {
    role: &'static str,
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

/// generateContent response payload
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}
