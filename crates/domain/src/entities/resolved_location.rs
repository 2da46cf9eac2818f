//! Resolved location entity - the outcome of a successful geocoding lookup

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinates;

/// A place name resolved to coordinates plus display labels
///
/// Immutable once resolved; cached by the lower-cased place name that
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// Resolved coordinates
    pub coordinates: Coordinates,
    /// Canonical place name from the geocoder
    pub name: String,
    /// First-level administrative area, empty when the geocoder omits it
    #[serde(default)]
    pub admin1: String,
    /// Country name, empty when the geocoder omits it
    #[serde(default)]
    pub country: String,
}

impl ResolvedLocation {
    /// Human-readable label in "name, admin1, country" form
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}, {}, {}", self.name, self.admin1, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokyo() -> ResolvedLocation {
        ResolvedLocation {
            coordinates: Coordinates::new_unchecked(35.6895, 139.6917),
            name: "Tokyo".to_string(),
            admin1: "Tokyo".to_string(),
            country: "Japan".to_string(),
        }
    }

    #[test]
    fn label_joins_name_admin_country() {
        assert_eq!(tokyo().label(), "Tokyo, Tokyo, Japan");
    }

    #[test]
    fn label_keeps_empty_segments() {
        // Matches the upstream label format even when fields are empty
        let location = ResolvedLocation {
            admin1: String::new(),
            country: String::new(),
            ..tokyo()
        };
        assert_eq!(location.label(), "Tokyo, , ");
    }

    #[test]
    fn serde_round_trip() {
        let location = tokyo();
        let json = serde_json::to_string(&location).unwrap();
        let parsed: ResolvedLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, location);
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let json = r#"{"coordinates":{"latitude":35.0,"longitude":139.0},"name":"Tokyo"}"#;
        let parsed: ResolvedLocation = serde_json::from_str(json).unwrap();
        assert!(parsed.admin1.is_empty());
        assert!(parsed.country.is_empty());
    }
}
