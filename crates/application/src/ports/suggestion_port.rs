//! Suggestion backend port
//!
//! Defines the interface for generating suggestion text through a named
//! LLM provider backend.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Prompt material handed to a completion backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionPrompt {
    /// Persona-specific system instruction
    pub system_instruction: String,
    /// User prompt embedding place, weather summary, and query
    pub user_prompt: String,
}

/// Port for LLM-backed text generation
///
/// `provider` selects a backend by name from a closed registry. Unknown
/// names fail with a not-configured error rather than silently falling
/// back to a default backend.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SuggestionPort: Send + Sync {
    /// Generate suggestion text using the named provider
    async fn generate(
        &self,
        provider: &str,
        prompt: CompletionPrompt,
    ) -> Result<String, ApplicationError>;
}
