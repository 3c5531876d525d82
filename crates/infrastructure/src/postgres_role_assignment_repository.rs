use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use stafflink_application::{ReplaceAssignments, RoleAssignmentRepository};
use stafflink_core::{AppError, AppResult};
use stafflink_domain::{Role, RoleGrant, StaffId};


/// PostgreSQL-backed repository for shadow users and role grants.
#[derive(Clone)]
pub struct PostgresRoleAssignmentRepository {
    pool: PgPool,
}

impl PostgresRoleAssignmentRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GrantRow {
    role_id: i64,
    role_name: String,
    granted_by: i64,
    granted_at: DateTime<Utc>,
}

#[async_trait]
impl RoleAssignmentRepository for PostgresRoleAssignmentRepository {
    async fn grants_for_user(&self, user_id: StaffId) -> AppResult<Vec<RoleGrant>> {
        let rows = sqlx::query_as::<_, GrantRow>(
            r#"
            SELECT
                assignments.role_id,
                roles.name AS role_name,
                assignments.granted_by,
                assignments.granted_at
            FROM staff_user_roles AS assignments
            INNER JOIN roles
                ON roles.id = assignments.role_id
            WHERE assignments.user_id = $1
            ORDER BY roles.name
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load role grants: {error}")))?;

        Ok(rows
            .into_iter()
            .map(|row| RoleGrant {
                role: Role {
                    id: row.role_id,
                    name: row.role_name,
                },
                granted_by: StaffId::new(row.granted_by),
                granted_at: row.granted_at,
            })
            .collect())
    }

    async fn replace_for_user(&self, input: ReplaceAssignments) -> AppResult<()> {
        let mut transaction =
            self.pool.begin().await.map_err(|error| {
                AppError::Internal(format!("failed to begin transaction: {error}"))
            })?;

        sqlx::query(
            r#"
            INSERT INTO staff_users (id)
            VALUES ($1)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(input.user_id.as_i64())
        .execute(&mut *transaction)
        .await
        .map_err(|error| AppError::Internal(format!("failed to upsert shadow user: {error}")))?;

        // Locks the shadow row so replaces for the same user serialize while
        // replaces for different users proceed independently.
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id
            FROM staff_users
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(input.user_id.as_i64())
        .fetch_one(&mut *transaction)
        .await
        .map_err(|error| AppError::Internal(format!("failed to lock shadow user: {error}")))?;

        sqlx::query(
            r#"
            DELETE FROM staff_user_roles
            WHERE user_id = $1
            "#,
        )
        .bind(input.user_id.as_i64())
        .execute(&mut *transaction)
        .await
        .map_err(|error| AppError::Internal(format!("failed to clear role grants: {error}")))?;

        // One generation shares one timestamp.
        let granted_at = Utc::now();
        for role_id in &input.role_ids {
            sqlx::query(
                r#"
                INSERT INTO staff_user_roles (user_id, role_id, granted_by, granted_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(input.user_id.as_i64())
            .bind(role_id)
            .bind(input.granted_by.as_i64())
            .bind(granted_at)
            .execute(&mut *transaction)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to persist role grant: {error}"))
            })?;
        }

        transaction.commit().await.map_err(|error| {
            AppError::Internal(format!("failed to commit transaction: {error}"))
        })
    }

    async fn role_ids_for_user(&self, user_id: StaffId) -> AppResult<Vec<i64>> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT role_id
            FROM staff_user_roles
            WHERE user_id = $1
            ORDER BY role_id
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list granted role ids: {error}")))
    }
}
