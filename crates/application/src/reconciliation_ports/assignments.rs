use async_trait::async_trait;

use stafflink_core::AppResult;
use stafflink_domain::{RoleGrant, StaffId};

/// Write-model input for one full assignment replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceAssignments {
    /// Target external user.
    pub user_id: StaffId,
    /// Validated, distinct role ids forming the new role set.
    pub role_ids: Vec<i64>,
    /// External id of the acting admin.
    pub granted_by: StaffId,
}

/// Repository port over the shadow-user and role-assignment stores.
#[async_trait]
pub trait RoleAssignmentRepository: Send + Sync {
    /// Returns the current grants for a user, ordered by role name.
    ///
    /// An empty result is the normal state for a user who never received a
    /// local role.
    async fn grants_for_user(&self, user_id: StaffId) -> AppResult<Vec<RoleGrant>>;

    /// Atomically replaces a user's grants with the given role set.
    ///
    /// Ensures the shadow user row exists first (idempotent), then removes
    /// every existing grant and inserts one row per role id, all stamped
    /// with the same grantor and timestamp. A failure partway through must
    /// leave the previous grant set intact. Replaces for the same user
    /// serialize; replaces for different users do not block each other.
    async fn replace_for_user(&self, input: ReplaceAssignments) -> AppResult<()>;

    /// Returns the role ids currently granted to a user.
    async fn role_ids_for_user(&self, user_id: StaffId) -> AppResult<Vec<i64>>;
}
