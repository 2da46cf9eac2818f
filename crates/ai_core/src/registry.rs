//! Registry of completion backends keyed by provider name

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::GenerationError;
use crate::ports::{CompletionBackend, CompletionRequest};

/// Dispatches completion requests to a named backend
///
/// Backends register under their [`CompletionBackend::name`]. Whether a
/// backend holds valid credentials is checked at call time, not at
/// registration.
#[derive(Default)]
pub struct ProviderRegistry {
    backends: HashMap<String, Arc<dyn CompletionBackend>>,
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers())
            .finish()
    }
}

impl ProviderRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend under its own name
    #[must_use]
    pub fn with_backend(mut self, backend: Arc<dyn CompletionBackend>) -> Self {
        self.backends.insert(backend.name().to_string(), backend);
        self
    }

    /// Look up a backend by provider name
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::NotConfigured`] when no backend is
    /// registered under the given name.
    pub fn get(&self, provider: &str) -> Result<&Arc<dyn CompletionBackend>, GenerationError> {
        self.backends.get(provider).ok_or_else(|| {
            GenerationError::NotConfigured(format!("Provider not configured: {provider}"))
        })
    }

    /// Run a completion against the named provider
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::NotConfigured`] for unknown providers,
    /// otherwise whatever the backend returns.
    #[instrument(skip(self, request))]
    pub async fn complete(
        &self,
        provider: &str,
        request: CompletionRequest,
    ) -> Result<String, GenerationError> {
        let backend = self.get(provider)?;
        debug!(provider = %provider, "Dispatching completion request");
        backend.complete(request).await
    }

    /// Names of all registered providers, sorted
    #[must_use]
    pub fn providers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.backends.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
