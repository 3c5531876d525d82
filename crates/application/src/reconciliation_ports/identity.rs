use async_trait::async_trait;

use stafflink_core::AppResult;
use stafflink_domain::{ExternalUser, StaffId};

/// Filter parameters forwarded verbatim to the identity provider listing API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    /// Raw query parameters as ordered key/value pairs.
    pub params: Vec<(String, String)>,
}

impl DirectoryFilter {
    /// Creates a filter from caller-supplied query parameters.
    #[must_use]
    pub fn new(params: Vec<(String, String)>) -> Self {
        Self { params }
    }
}

/// Client port over the external identity provider.
///
/// The provider owns users, their profile attributes, and authentication;
/// this port is read-only and treated as a remote, fallible dependency.
#[async_trait]
pub trait IdentityLookup: Send + Sync {
    /// Returns the full profile for one external user.
    ///
    /// Fails with `NotFound` when the provider has no such user, and with
    /// `Upstream` when the provider is unreachable or errors.
    async fn find_user(&self, staff_id: StaffId) -> AppResult<ExternalUser>;

    /// Lists users known to the identity provider.
    async fn list_users(&self, filter: &DirectoryFilter) -> AppResult<Vec<ExternalUser>>;
}
