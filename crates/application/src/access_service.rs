use std::sync::Arc;

use stafflink_core::{ActorIdentity, AppError, AppResult};
use stafflink_domain::StaffId;

use crate::reconciliation_ports::RoleAssignmentRepository;

/// Application service enforcing the local admin role gate.
///
/// Authentication is owned by the SSO gateway; this gate only checks the
/// locally granted role ids of an already-authenticated actor.
#[derive(Clone)]
pub struct AccessControlService {
    assignments: Arc<dyn RoleAssignmentRepository>,
}

impl AccessControlService {
    /// Creates a new gate from the assignment repository.
    #[must_use]
    pub fn new(assignments: Arc<dyn RoleAssignmentRepository>) -> Self {
        Self { assignments }
    }

    /// Fails with `Forbidden` unless the actor holds one of the allowed roles.
    pub async fn require_any_role(
        &self,
        actor: &ActorIdentity,
        allowed_role_ids: &[i64],
    ) -> AppResult<()> {
        let held = self
            .assignments
            .role_ids_for_user(StaffId::new(actor.staff_id()))
            .await?;

        if held.iter().any(|id| allowed_role_ids.contains(id)) {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "staff '{}' does not hold a required administrative role",
            actor.staff_id()
        )))
    }
}
