//! Search history port
//!
//! Persists the per-user suggestion search log and lifetime counter.
//! Persistence is owned by an external collaborator service; the bundled
//! adapter keeps an in-process store.

use async_trait::async_trait;
use domain::{entities::SearchRecord, value_objects::UserId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for recording and reading per-user search history
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SearchHistoryPort: Send + Sync {
    /// Append one search to the caller's history
    async fn record_search(&self, record: SearchRecord) -> Result<(), ApplicationError>;

    /// Bump the caller's lifetime search counter, returning the new total
    async fn increment_search_count(&self, user: &UserId) -> Result<u64, ApplicationError>;

    /// Most recent searches for the user, newest first
    async fn recent_searches(
        &self,
        user: &UserId,
        limit: usize,
    ) -> Result<Vec<SearchRecord>, ApplicationError>;
}
