//! Stafflink API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use stafflink_application::{
    AccessControlService, DirectoryService, RoleReconciliationService,
};
use stafflink_core::AppError;
use stafflink_infrastructure::{
    HttpIdentityResolver, PostgresRoleAssignmentRepository, PostgresRoleCatalog,
};

use crate::api_config::{ApiConfig, init_tracing};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(config.database_url.as_str())
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))?;

    sqlx::migrate!("../../crates/infrastructure/migrations")
        .run(&pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to run migrations: {error}")))?;

    if config.migrate_only {
        info!("migrations applied, exiting");
        return Ok(());
    }

    let identity = Arc::new(HttpIdentityResolver::new(config.identity_source.clone())?);
    let catalog = Arc::new(PostgresRoleCatalog::new(pool.clone()));
    let assignments = Arc::new(PostgresRoleAssignmentRepository::new(pool.clone()));

    let state = AppState {
        role_service: RoleReconciliationService::new(
            identity.clone(),
            catalog,
            assignments.clone(),
        ),
        directory_service: DirectoryService::new(identity),
        access_control: AccessControlService::new(assignments),
        admin_role_ids: config.admin_role_ids.clone(),
    };

    let router = api_router::build_router(state, config.frontend_url.as_str())?;
    let address = config.socket_address()?;

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind {address}: {error}")))?;

    info!(%address, "stafflink api listening");

    axum::serve(listener, router)
        .await
        .map_err(|error| AppError::Internal(format!("server error: {error}")))
}
