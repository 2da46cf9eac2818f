//! In-memory search history adapter
//!
//! Implements [`SearchHistoryPort`] with a process-local store. Records
//! survive for the process lifetime only; a multi-instance deployment
//! would put a shared store behind the same port.

use std::{collections::HashMap, sync::Arc};

use application::{error::ApplicationError, ports::SearchHistoryPort};
use async_trait::async_trait;
use domain::{entities::SearchRecord, value_objects::UserId};
use parking_lot::RwLock;
use tracing::debug;

/// Retained records per user; the oldest entries are dropped beyond this
const MAX_RETAINED_PER_USER: usize = 100;

#[derive(Debug, Clone, Default)]
struct UserHistory {
    searches: Vec<SearchRecord>,
    search_count: u64,
}

/// Per-user search log and lifetime counter held in process memory
///
/// Clones share the underlying store.
#[derive(Debug, Clone)]
pub struct InMemorySearchHistory {
    data: Arc<RwLock<HashMap<UserId, UserHistory>>>,
}

impl InMemorySearchHistory {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemorySearchHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchHistoryPort for InMemorySearchHistory {
    async fn record_search(&self, record: SearchRecord) -> Result<(), ApplicationError> {
        let mut data = self.data.write();
        let entry = data.entry(record.user.clone()).or_default();

        entry.searches.push(record);
        if entry.searches.len() > MAX_RETAINED_PER_USER {
            let excess = entry.searches.len() - MAX_RETAINED_PER_USER;
            entry.searches.drain(..excess);
        }

        debug!(retained = entry.searches.len(), "Search recorded");
        Ok(())
    }

    async fn increment_search_count(&self, user: &UserId) -> Result<u64, ApplicationError> {
        let mut data = self.data.write();
        let entry = data.entry(user.clone()).or_default();
        entry.search_count += 1;
        Ok(entry.search_count)
    }

    async fn recent_searches(
        &self,
        user: &UserId,
        limit: usize,
    ) -> Result<Vec<SearchRecord>, ApplicationError> {
        let data = self.data.read();
        Ok(data.get(user).map_or_else(Vec::new, |entry| {
            entry.searches.iter().rev().take(limit).cloned().collect()
        }))
    }
}

#[cfg(test)]
mod tests {
    use domain::value_objects::{Language, Persona};

    use super::*;

    fn record(user: &str, place: &str) -> SearchRecord {
        SearchRecord::new(
            UserId::from(user),
            place,
            "something to do",
            Persona::Outings,
            Language::En,
        )
    }

    #[tokio::test]
    async fn records_are_returned_newest_first() {
        let history = InMemorySearchHistory::new();
        let user = UserId::from("alice");

        for place in ["Tokyo", "Kyoto", "Osaka"] {
            history.record_search(record("alice", place)).await.unwrap();
        }

        let recent = history.recent_searches(&user, 20).await.unwrap();
        let places: Vec<&str> = recent.iter().map(|r| r.place.as_str()).collect();
        assert_eq!(places, vec!["Osaka", "Kyoto", "Tokyo"]);
    }

    #[tokio::test]
    async fn limit_caps_the_result() {
        let history = InMemorySearchHistory::new();
        let user = UserId::from("alice");

        for i in 0..5 {
            history
                .record_search(record("alice", &format!("Place {i}")))
                .await
                .unwrap();
        }

        let recent = history.recent_searches(&user, 2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].place, "Place 4");
    }

    #[tokio::test]
    async fn histories_are_isolated_per_user() {
        let history = InMemorySearchHistory::new();

        history.record_search(record("alice", "Tokyo")).await.unwrap();
        history.record_search(record("bob", "Berlin")).await.unwrap();

        let alice = history
            .recent_searches(&UserId::from("alice"), 20)
            .await
            .unwrap();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].place, "Tokyo");
    }

    #[tokio::test]
    async fn unknown_user_has_empty_history() {
        let history = InMemorySearchHistory::new();
        let recent = history
            .recent_searches(&UserId::from("nobody"), 20)
            .await
            .unwrap();
        assert!(recent.is_empty());
    }

    #[tokio::test]
    async fn counter_increments_per_user() {
        let history = InMemorySearchHistory::new();
        let alice = UserId::from("alice");
        let bob = UserId::from("bob");

        assert_eq!(history.increment_search_count(&alice).await.unwrap(), 1);
        assert_eq!(history.increment_search_count(&alice).await.unwrap(), 2);
        assert_eq!(history.increment_search_count(&bob).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn retention_bound_drops_the_oldest() {
        let history = InMemorySearchHistory::new();
        let user = UserId::from("alice");

        for i in 0..(MAX_RETAINED_PER_USER + 5) {
            history
                .record_search(record("alice", &format!("Place {i}")))
                .await
                .unwrap();
        }

        let recent = history
            .recent_searches(&user, MAX_RETAINED_PER_USER + 5)
            .await
            .unwrap();
        assert_eq!(recent.len(), MAX_RETAINED_PER_USER);
        // The first five records are gone; the newest survives
        assert_eq!(recent[0].place, format!("Place {}", MAX_RETAINED_PER_USER + 4));
        assert!(recent.iter().all(|r| r.place != "Place 0"));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let history = InMemorySearchHistory::new();
        let clone = history.clone();

        clone.record_search(record("alice", "Tokyo")).await.unwrap();

        let recent = history
            .recent_searches(&UserId::from("alice"), 20)
            .await
            .unwrap();
        assert_eq!(recent.len(), 1);
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemorySearchHistory>();
    }
}
