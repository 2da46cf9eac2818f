//! Search record entity - one entry in a user's search history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Language, Persona, UserId};

/// An append-only record of a suggestion search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Who searched
    pub user: UserId,
    /// Place the search referred to, possibly empty
    pub place: String,
    /// The free-text query
    pub query: String,
    /// Persona the suggestions were generated with
    pub persona: Persona,
    /// Output language of the suggestions
    pub language: Language,
    /// When the search happened
    pub searched_at: DateTime<Utc>,
}

impl SearchRecord {
    /// Create a record stamped with the current time
    pub fn new(
        user: UserId,
        place: impl Into<String>,
        query: impl Into<String>,
        persona: Persona,
        language: Language,
    ) -> Self {
        Self {
            user,
            place: place.into(),
            query: query.into(),
            persona,
            language,
            searched_at: Utc::now(),
        }
    }
}
