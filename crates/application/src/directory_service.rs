use std::sync::Arc;

use stafflink_core::AppResult;
use stafflink_domain::{ExternalUser, ExternalUserSummary};

use crate::reconciliation_ports::{DirectoryFilter, IdentityLookup};

/// Application service for identity-provider directory passthrough listings.
///
/// Nothing here touches local state; caller-supplied filters are forwarded
/// verbatim to the provider.
#[derive(Clone)]
pub struct DirectoryService {
    identity: Arc<dyn IdentityLookup>,
}

impl DirectoryService {
    /// Creates a new service from the identity port.
    #[must_use]
    pub fn new(identity: Arc<dyn IdentityLookup>) -> Self {
        Self { identity }
    }

    /// Lists full user profiles from the identity provider.
    pub async fn list_users(&self, filter: &DirectoryFilter) -> AppResult<Vec<ExternalUser>> {
        self.identity.list_users(filter).await
    }

    /// Lists id and full name only, for name-picker widgets.
    pub async fn list_user_names(
        &self,
        filter: &DirectoryFilter,
    ) -> AppResult<Vec<ExternalUserSummary>> {
        let users = self.identity.list_users(filter).await?;

        Ok(users
            .into_iter()
            .map(|user| ExternalUserSummary {
                id: user.id,
                full_name: user.staff.full_name,
            })
            .collect())
    }
}
