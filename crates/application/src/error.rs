//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// The message of each variant is what callers ultimately see; the HTTP
/// layer maps variants to status codes without rewording them.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Input rejected before any upstream call was made
    #[error("{0}")]
    Validation(String),

    /// The requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// An upstream dependency could not serve the request
    #[error("{0}")]
    UpstreamUnavailable(String),

    /// A suggestion backend call failed
    #[error("{0}")]
    Generation(String),

    /// A suggestion backend is missing credentials or is not registered
    #[error("{0}")]
    NotConfigured(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
