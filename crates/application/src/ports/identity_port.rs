//! Identity port
//!
//! Resolves opaque request credentials to an authenticated user. Identity
//! is owned by an external collaborator service; the bundled adapter maps
//! static bearer tokens to user names.

use async_trait::async_trait;
use domain::value_objects::UserId;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// An authenticated caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Stable identifier
    pub id: UserId,
    /// Display name
    pub name: String,
}

/// Port for resolving the calling user
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityPort: Send + Sync {
    /// Resolve a bearer credential to a user; `None` means anonymous
    async fn current_user<'a>(
        &self,
        credential: Option<&'a str>,
    ) -> Result<Option<CurrentUser>, ApplicationError>;
}
