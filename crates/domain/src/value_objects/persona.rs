//! Suggestion persona value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A named suggestion style selecting a system prompt
///
/// The set is closed; requests carrying any other value are rejected
/// before a provider is ever invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Local activities and outings lasting 2-4 hours
    Outings,
    /// Day trips and overnight travel
    Travel,
    /// Weather-appropriate outfit recommendations
    Fashion,
}

impl Persona {
    /// All personas, in canonical order
    pub const ALL: [Self; 3] = [Self::Outings, Self::Travel, Self::Fashion];

    /// The wire representation of this persona
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Outings => "outings",
            Self::Travel => "travel",
            Self::Fashion => "fashion",
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::Outings
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Persona {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "outings" => Ok(Self::Outings),
            "travel" => Ok(Self::Travel),
            "fashion" => Ok(Self::Fashion),
            other => Err(DomainError::InvalidPersona(other.to_string())),
        }
    }
}
