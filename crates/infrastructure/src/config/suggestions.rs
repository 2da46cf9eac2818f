//! Suggestion provider configuration.

use ai_core::{GeminiConfig, OpenAiConfig};
use serde::{Deserialize, Serialize};

/// LLM suggestion provider configuration
///
/// Both providers are always registered; a backend without an API key
/// rejects calls rather than disappearing from the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    /// Provider used when a request does not name one
    #[serde(default = "default_provider")]
    pub default_provider: String,

    /// OpenAI chat completions settings
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Gemini generateContent settings
    #[serde(default)]
    pub gemini: GeminiConfig,
}

fn default_provider() -> String {
    "openai".to_string()
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            openai: OpenAiConfig::default(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl SuggestionsConfig {
    /// Validate provider selection and backend settings
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.default_provider.as_str(), "openai" | "gemini") {
            return Err(format!(
                "suggestions.default_provider must be \"openai\" or \"gemini\", got \"{}\"",
                self.default_provider
            ));
        }
        if self.openai.timeout_secs == 0 {
            return Err("suggestions.openai.timeout_secs must be greater than zero".to_string());
        }
        if self.gemini.timeout_secs == 0 {
            return Err("suggestions.gemini.timeout_secs must be greater than zero".to_string());
        }
        Ok(())
    }
}
