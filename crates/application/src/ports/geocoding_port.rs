//! Geocoding port
//!
//! Defines the interface for resolving free-form place names to coordinates.

use async_trait::async_trait;
use domain::entities::ResolvedLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for place-name resolution
///
/// `Ok(None)` covers both "the upstream knows no such place" and "the
/// lookup could not be completed"; the adapter logs the distinction while
/// callers treat either case as not found.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place name to a location, consulting the cache first
    async fn resolve(&self, place: &str) -> Result<Option<ResolvedLocation>, ApplicationError>;
}
