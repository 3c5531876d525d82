use std::sync::Arc;

use chrono::{DateTime, Utc};

use stafflink_core::{AppError, AppResult};
use stafflink_domain::{ExternalUser, Role, StaffId};

use crate::reconciliation_ports::{
    IdentityLookup, ReplaceAssignments, RoleAssignmentRepository, RoleCatalog,
};

mod assign;
mod detail;
#[cfg(test)]
mod tests;

/// Read-side projection of a user's locally granted roles.
///
/// Attribution fields are absent for users without any grant; that is the
/// normal empty state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributedRoles {
    /// Currently granted roles, ordered by role name.
    pub roles: Vec<Role>,
    /// When the role set was last replaced.
    pub updated_at: Option<DateTime<Utc>>,
    /// Display name of the admin who performed the last replace.
    pub updated_by: Option<String>,
}

/// Composition of the external profile and the local attributed role view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetail {
    /// Profile owned by the identity provider.
    pub profile: ExternalUser,
    /// Locally owned role overlay.
    pub roles: AttributedRoles,
}

/// Application service reconciling local role grants with external identities.
///
/// Validates requested role sets against the catalog, materializes shadow
/// users lazily, replaces grant sets atomically, and reconstructs the
/// grantor attribution on read.
#[derive(Clone)]
pub struct RoleReconciliationService {
    identity: Arc<dyn IdentityLookup>,
    catalog: Arc<dyn RoleCatalog>,
    assignments: Arc<dyn RoleAssignmentRepository>,
}

impl RoleReconciliationService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        identity: Arc<dyn IdentityLookup>,
        catalog: Arc<dyn RoleCatalog>,
        assignments: Arc<dyn RoleAssignmentRepository>,
    ) -> Self {
        Self {
            identity,
            catalog,
            assignments,
        }
    }

    /// Lists the role catalog for administrative views.
    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.catalog.list_roles().await
    }
}
