//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Persona outside the closed set
    #[error("Invalid persona. Must be outings, travel, or fashion")]
    InvalidPersona(String),

    /// Output language outside the closed set
    #[error("Invalid output language. Must be en or ja")]
    InvalidLanguage(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Get the rejected input, where the variant carries one
    #[must_use]
    pub fn rejected_input(&self) -> Option<&str> {
        match self {
            Self::InvalidPersona(s) | Self::InvalidLanguage(s) => Some(s),
            Self::NotFound { .. } | Self::ValidationError(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_creates_correct_error() {
        let err = DomainError::not_found("Location", "atlantis");
        match err {
            DomainError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "Location");
                assert_eq!(id, "atlantis");
            },
            _ => unreachable!("Expected NotFound error"),
        }
    }

    #[test]
    fn not_found_error_message_is_correct() {
        let err = DomainError::not_found("Location", "atlantis");
        assert_eq!(err.to_string(), "Location not found: atlantis");
    }

    #[test]
    fn invalid_persona_message_lists_valid_values() {
        let err = DomainError::InvalidPersona("hiking".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid persona. Must be outings, travel, or fashion"
        );
        assert_eq!(err.rejected_input(), Some("hiking"));
    }

    #[test]
    fn invalid_language_message_lists_valid_values() {
        let err = DomainError::InvalidLanguage("fr".to_string());
        assert_eq!(err.to_string(), "Invalid output language. Must be en or ja");
        assert_eq!(err.rejected_input(), Some("fr"));
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("field is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: field is required");
    }

    #[test]
    fn rejected_input_absent_for_not_found() {
        let err = DomainError::not_found("Location", "x");
        assert!(err.rejected_input().is_none());
    }
}
