//! Configuration for completion backends

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the OpenAI chat completions backend
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API key; the backend reports itself unconfigured when absent
    #[serde(skip_serializing, default)]
    pub api_key: Option<SecretString>,

    /// API base URL (default: <https://api.openai.com/v1>)
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,

    /// Model identifier (default: gpt-4o-mini)
    #[serde(default = "default_openai_model")]
    pub model: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_openai_base_url(),
            model: default_openai_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenAiConfig {
    /// Create a configuration pointed at a test server, with a dummy key
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: Some(SecretString::from("test-key")),
            base_url: base_url.to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }
}

/// Configuration for the Gemini generateContent backend
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key; the backend reports itself unconfigured when absent
    #[serde(skip_serializing, default)]
    pub api_key: Option<SecretString>,

    /// API base URL (default: <https://generativelanguage.googleapis.com/v1beta>)
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Model identifier (default: gemini-2.5-pro)
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-pro".to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Create a configuration pointed at a test server, with a dummy key
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: Some(SecretString::from("test-key")),
            base_url: base_url.to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }
}
