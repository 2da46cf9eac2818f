//! Output language value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Language for summaries and generated suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Japanese
    Ja,
}

impl Language {
    /// The wire representation of this language
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// Lenient parse for contexts where unknown codes fall back to English
    ///
    /// The weather summary accepts any `lang` value and renders the English
    /// template for codes it does not know; only the suggest flow validates
    /// strictly (via `FromStr`).
    #[must_use]
    pub fn from_code_lenient(code: &str) -> Self {
        match code {
            "ja" => Self::Ja,
            _ => Self::En,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ja" => Ok(Self::Ja),
            other => Err(DomainError::InvalidLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_languages() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("ja".parse::<Language>().unwrap(), Language::Ja);
    }

    #[test]
    fn rejects_unknown_language() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid output language. Must be en or ja");
    }

    #[test]
    fn lenient_parse_falls_back_to_english() {
        assert_eq!(Language::from_code_lenient("ja"), Language::Ja);
        assert_eq!(Language::from_code_lenient("en"), Language::En);
        assert_eq!(Language::from_code_lenient("de"), Language::En);
        assert_eq!(Language::from_code_lenient(""), Language::En);
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(Language::En.to_string(), "en");
        assert_eq!(Language::Ja.to_string(), "ja");
    }

    #[test]
    fn serialize_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Ja).unwrap(), "\"ja\"");
    }

    #[test]
    fn deserialize_from_lowercase() {
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
