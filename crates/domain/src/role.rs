use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::StaffId;

/// Baseline role id for system administrators.
pub const SYSTEM_MANAGEMENT_ROLE_ID: i64 = 1;

/// Baseline role id for user administrators.
pub const USER_MANAGEMENT_ROLE_ID: i64 = 18;

/// A local role from the read-only catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Stable role identifier.
    pub id: i64,
    /// Unique role name.
    pub name: String,
}

/// One currently-active grant of one role to one user.
///
/// The set of grants for a user at any instant is exactly the user's current
/// role set; a role assignment replaces the whole set in one transaction, so
/// every grant in one generation carries the same grantor and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrant {
    /// The granted role.
    pub role: Role,
    /// External staff id of the admin who performed the grant.
    pub granted_by: StaffId,
    /// Timestamp of the replace operation that wrote this grant.
    pub granted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::{SYSTEM_MANAGEMENT_ROLE_ID, USER_MANAGEMENT_ROLE_ID};

    #[test]
    fn baseline_role_ids_are_distinct() {
        assert_ne!(SYSTEM_MANAGEMENT_ROLE_ID, USER_MANAGEMENT_ROLE_ID);
    }
}
