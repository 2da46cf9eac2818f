//! AI Core - Hosted LLM completion backends
//!
//! Provides the completion abstraction and the OpenAI and Gemini
//! implementations behind it. Backends are registered by name in a
//! [`ProviderRegistry`]; missing credentials surface as
//! [`GenerationError::NotConfigured`] at call time.

pub mod config;
pub mod error;
pub mod gemini;
pub mod openai;
pub mod ports;
pub mod registry;

pub use config::{GeminiConfig, OpenAiConfig};
pub use error::GenerationError;
pub use gemini::GeminiBackend;
pub use openai::OpenAiBackend;
pub use ports::{CompletionBackend, CompletionRequest};
pub use registry::ProviderRegistry;
