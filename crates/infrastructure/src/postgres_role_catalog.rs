use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use stafflink_application::RoleCatalog;
use stafflink_core::{AppError, AppResult};
use stafflink_domain::Role;

/// PostgreSQL-backed read-only role catalog.
#[derive(Clone)]
pub struct PostgresRoleCatalog {
    pool: PgPool,
}

impl PostgresRoleCatalog {
    /// Creates a catalog with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoleRow {
    id: i64,
    name: String,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

#[async_trait]
impl RoleCatalog for PostgresRoleCatalog {
    async fn find_roles_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name
            FROM roles
            WHERE id = ANY($1)
            ORDER BY name
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to resolve roles: {error}")))?;

        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name
            FROM roles
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list roles: {error}")))?;

        Ok(rows.into_iter().map(Role::from).collect())
    }
}
