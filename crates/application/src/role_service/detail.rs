use super::*;

impl RoleReconciliationService {
    /// Returns the composed profile and attributed role view for a user.
    pub async fn user_detail(&self, user_id: StaffId) -> AppResult<UserDetail> {
        let profile = self.identity.find_user(user_id).await?;
        let roles = self.attributed_roles(user_id).await?;

        Ok(UserDetail { profile, roles })
    }

    /// Reconstructs the attributed role projection from the grant rows.
    ///
    /// All rows of one generation carry the same grantor and timestamp, so
    /// the earliest row is a sufficient attribution source; the grantor's
    /// display name is resolved through the identity provider on every read.
    async fn attributed_roles(&self, user_id: StaffId) -> AppResult<AttributedRoles> {
        let grants = self.assignments.grants_for_user(user_id).await?;

        let Some(reference) = grants
            .iter()
            .min_by_key(|grant| (grant.granted_at, grant.role.id))
            .cloned()
        else {
            return Ok(AttributedRoles {
                roles: Vec::new(),
                updated_at: None,
                updated_by: None,
            });
        };

        let grantor = self
            .identity
            .find_user(reference.granted_by)
            .await
            .map_err(|error| match error {
                AppError::Upstream(message) => AppError::Upstream(message),
                other => AppError::Upstream(format!(
                    "failed to resolve grantor '{}': {other}",
                    reference.granted_by
                )),
            })?;

        Ok(AttributedRoles {
            roles: grants.into_iter().map(|grant| grant.role).collect(),
            updated_at: Some(reference.granted_at),
            updated_by: Some(grantor.staff.full_name),
        })
    }
}
