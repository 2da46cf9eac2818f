//! Static identity adapter - bearer tokens resolved against a fixed table

use std::collections::HashMap;

use application::{
    error::ApplicationError,
    ports::{CurrentUser, IdentityPort},
};
use async_trait::async_trait;
use domain::value_objects::UserId;
use tracing::debug;

use crate::config::AuthConfig;

/// Resolves bearer tokens against the configured token table
///
/// Unknown or absent credentials resolve to anonymous rather than an
/// error; endpoints decide whether anonymous access is acceptable.
pub struct StaticIdentityAdapter {
    tokens: HashMap<String, String>,
}

impl StaticIdentityAdapter {
    /// Build the adapter from the auth section
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self {
            tokens: config.tokens,
        }
    }
}

impl std::fmt::Debug for StaticIdentityAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticIdentityAdapter")
            .field("tokens", &format!("{} entries", self.tokens.len()))
            .finish()
    }
}

#[async_trait]
impl IdentityPort for StaticIdentityAdapter {
    #[allow(clippy::option_if_let_else)]
    async fn current_user<'a>(
        &self,
        credential: Option<&'a str>,
    ) -> Result<Option<CurrentUser>, ApplicationError> {
        let Some(token) = credential else {
            return Ok(None);
        };

        match self.tokens.get(token) {
            Some(name) => Ok(Some(CurrentUser {
                id: UserId::new(name.as_str()),
                name: name.clone(),
            })),
            None => {
                // The token value itself stays out of the logs
                debug!("Rejected unknown bearer token");
                Ok(None)
            },
        }
    }
}
