//! Completion errors

use thiserror::Error;

/// Errors that can occur while generating a completion
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Provider is unknown or its credentials are missing
    ///
    /// The message is surfaced to callers verbatim.
    #[error("{0}")]
    NotConfigured(String),

    /// Failed to connect to the provider
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the provider failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during generation
    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_message_is_verbatim() {
        let err = GenerationError::NotConfigured("OpenAI API key not configured".to_string());
        assert_eq!(err.to_string(), "OpenAI API key not configured");
    }

    #[test]
    fn request_failed_includes_detail() {
        let err = GenerationError::RequestFailed("HTTP 500".to_string());
        assert_eq!(err.to_string(), "Request failed: HTTP 500");
    }

    #[test]
    fn timeout_display() {
        assert_eq!(GenerationError::Timeout.to_string(), "Request timed out");
    }
}
