//! Bearer token authentication configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Static bearer token table
///
/// Maps raw token values to user display names. Tokens are credentials;
/// they are skipped on serialization and never appear in debug output.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Token value to user name
    #[serde(skip_serializing, default)]
    pub tokens: HashMap<String, String>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("tokens", &format!("{} entries", self.tokens.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let config = AuthConfig::default();
        assert!(config.tokens.is_empty());
    }

    #[test]
    fn deserializes_token_table() {
        let json = r#"{"tokens":{"tok-alice":"alice","tok-bob":"bob"}}"#;
        let config: AuthConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tokens.len(), 2);
        assert_eq!(config.tokens.get("tok-alice").map(String::as_str), Some("alice"));
    }

    #[test]
    fn serialization_omits_token_values() {
        let mut config = AuthConfig::default();
        config
            .tokens
            .insert("super-secret".to_string(), "alice".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
    }

    #[test]
    fn debug_hides_token_values() {
        let mut config = AuthConfig::default();
        config
            .tokens
            .insert("super-secret".to_string(), "alice".to_string());
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("1 entries"));
    }
}
