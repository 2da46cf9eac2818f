//! Suggestion adapter - routes prompts to registered LLM backends

use std::sync::Arc;

use ai_core::{
    CompletionRequest, GeminiBackend, GenerationError, OpenAiBackend, ProviderRegistry,
};
use application::{
    error::ApplicationError,
    ports::{CompletionPrompt, SuggestionPort},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::SuggestionsConfig;

/// Exposes the completion backend registry as [`SuggestionPort`]
#[derive(Debug)]
pub struct SuggestionAdapter {
    registry: ProviderRegistry,
}

impl SuggestionAdapter {
    /// Wrap an already-populated registry
    #[must_use]
    pub const fn new(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    /// Build both hosted backends from configuration
    ///
    /// Backends without an API key are still registered; they reject
    /// calls with a not-configured error instead of vanishing from the
    /// registry.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client fails to initialize.
    pub fn from_config(config: &SuggestionsConfig) -> Result<Self, ApplicationError> {
        let openai = OpenAiBackend::new(config.openai.clone())
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        let gemini = GeminiBackend::new(config.gemini.clone())
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        let registry = ProviderRegistry::new()
            .with_backend(Arc::new(openai))
            .with_backend(Arc::new(gemini));
        Ok(Self::new(registry))
    }

    fn map_error(provider: &str, e: GenerationError) -> ApplicationError {
        match e {
            // Missing-credential messages reach callers verbatim
            GenerationError::NotConfigured(message) => ApplicationError::NotConfigured(message),
            e if provider == "gemini" => ApplicationError::Generation(format!(
                "Failed to generate Gemini suggestions: {e}"
            )),
            e => ApplicationError::Generation(format!("Failed to generate suggestions: {e}")),
        }
    }
}

#[async_trait]
impl SuggestionPort for SuggestionAdapter {
    #[instrument(skip(self, prompt))]
    async fn generate(
        &self,
        provider: &str,
        prompt: CompletionPrompt,
    ) -> Result<String, ApplicationError> {
        let request = CompletionRequest::new(prompt.system_instruction, prompt.user_prompt);
        let text = self
            .registry
            .complete(provider, request)
            .await
            .map_err(|e| Self::map_error(provider, e))?;

        debug!(chars = text.len(), "Generated suggestion text");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> CompletionPrompt {
        CompletionPrompt {
            system_instruction: "You are a local outings guide.".to_string(),
            user_prompt: "Weather in Tokyo: sunny. What should I do?".to_string(),
        }
    }

    #[test]
    fn missing_key_message_passes_through_verbatim() {
        let e = SuggestionAdapter::map_error(
            "openai",
            GenerationError::NotConfigured("OpenAI API key not configured".to_string()),
        );
        assert!(
            matches!(e, ApplicationError::NotConfigured(ref m) if m == "OpenAI API key not configured")
        );
    }

    #[test]
    fn gemini_failures_name_the_provider() {
        let e = SuggestionAdapter::map_error(
            "gemini",
            GenerationError::RequestFailed("HTTP 500".to_string()),
        );
        assert_eq!(
            e.to_string(),
            "Failed to generate Gemini suggestions: Request failed: HTTP 500"
        );
    }

    #[test]
    fn other_failures_use_the_generic_prefix() {
        let e = SuggestionAdapter::map_error("openai", GenerationError::Timeout);
        assert_eq!(
            e.to_string(),
            "Failed to generate suggestions: Request timed out"
        );
    }

    #[tokio::test]
    async fn unconfigured_backend_rejects_at_call_time() {
        let adapter = SuggestionAdapter::from_config(&SuggestionsConfig::default()).unwrap();
        let err = adapter.generate("openai", prompt()).await.unwrap_err();
        assert_eq!(err.to_string(), "OpenAI API key not configured");
    }

    #[tokio::test]
    async fn unknown_provider_is_rejected() {
        let adapter = SuggestionAdapter::from_config(&SuggestionsConfig::default()).unwrap();
        let err = adapter.generate("mistral", prompt()).await.unwrap_err();
        assert_eq!(err.to_string(), "Provider not configured: mistral");
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SuggestionAdapter>();
    }
}
