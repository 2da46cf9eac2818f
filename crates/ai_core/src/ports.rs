//! Port definitions for completion backends
//!
//! Defines the trait that hosted LLM providers implement, plus the
//! request type they consume.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// A single-turn completion request
///
/// Backends translate this into their provider's wire format: a system
/// role message plus a user role message, or the provider's equivalent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Instruction that frames the assistant's behavior
    pub system_instruction: String,
    /// The user-facing prompt
    pub user_prompt: String,
}

impl CompletionRequest {
    /// Create a request from a system instruction and user prompt
    pub fn new(system_instruction: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            user_prompt: user_prompt.into(),
        }
    }
}

/// Port for hosted completion providers
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Stable provider name used for registry lookup (e.g. "openai")
    fn name(&self) -> &'static str;

    /// Generate a completion for the request
    ///
    /// Implementations must verify their credentials before any network
    /// call and return [`GenerationError::NotConfigured`] when absent.
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_construction() {
        let request = CompletionRequest::new("Be concise", "Plan my day");
        assert_eq!(request.system_instruction, "Be concise");
        assert_eq!(request.user_prompt, "Plan my day");
    }

    #[test]
    fn request_serialization() {
        let request = CompletionRequest::new("system", "user");
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("system_instruction"));
        let parsed: CompletionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn trait_is_object_safe() {
        fn _assert_object_safe(_: &dyn CompletionBackend) {}
    }
}
