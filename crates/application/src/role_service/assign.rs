use std::collections::BTreeSet;

use super::*;

impl RoleReconciliationService {
    /// Replaces the target user's role set with the requested one.
    ///
    /// The target must exist in the identity provider; the check runs before
    /// any local mutation. Requested ids are de-duplicated, validated
    /// against the catalog, and written as one atomic replace stamped with
    /// the acting admin's id.
    pub async fn assign_roles(
        &self,
        user_id: StaffId,
        role_ids: &[i64],
        grantor: StaffId,
    ) -> AppResult<()> {
        self.identity.find_user(user_id).await?;

        let role_ids = self.validate_role_ids(role_ids).await?;

        self.assignments
            .replace_for_user(ReplaceAssignments {
                user_id,
                role_ids,
                granted_by: grantor,
            })
            .await
    }

    /// Resolves the requested ids against the catalog.
    ///
    /// Ids are de-duplicated before the count comparison, so a duplicated
    /// known id never masks a missing one and never causes a false
    /// rejection. An empty request is valid and clears the role set.
    async fn validate_role_ids(&self, requested: &[i64]) -> AppResult<Vec<i64>> {
        let distinct: Vec<i64> = requested
            .iter()
            .copied()
            .collect::<BTreeSet<i64>>()
            .into_iter()
            .collect();

        if distinct.is_empty() {
            return Ok(distinct);
        }

        let found = self.catalog.find_roles_by_ids(&distinct).await?;
        if found.len() < distinct.len() {
            let known: BTreeSet<i64> = found.iter().map(|role| role.id).collect();
            let missing: Vec<String> = distinct
                .iter()
                .filter(|id| !known.contains(id))
                .map(ToString::to_string)
                .collect();

            return Err(AppError::Validation(format!(
                "unknown role ids: {}",
                missing.join(", ")
            )));
        }

        Ok(distinct)
    }
}
