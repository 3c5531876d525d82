use async_trait::async_trait;

use stafflink_core::AppResult;
use stafflink_domain::Role;

/// Read-only port over the persisted role catalog.
///
/// Role creation and deletion are owned elsewhere; this core only resolves
/// requested ids against the catalog and lists it for administrative views.
#[async_trait]
pub trait RoleCatalog: Send + Sync {
    /// Returns the catalog roles matching the given ids.
    ///
    /// Unknown ids are silently absent from the result; callers compare
    /// counts to detect them.
    async fn find_roles_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Role>>;

    /// Lists the whole catalog ordered by role name.
    async fn list_roles(&self) -> AppResult<Vec<Role>>;
}
