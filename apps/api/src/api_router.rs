use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use stafflink_core::AppError;

use crate::state::AppState;
use crate::{handlers, middleware};

pub fn build_router(state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let admin_routes = Router::new()
        .route("/api/users", get(handlers::list_users_handler))
        .route("/api/users/{user_id}", get(handlers::user_detail_handler))
        .route(
            "/api/users/{user_id}/role-assignment",
            post(handlers::assign_roles_handler),
        )
        .route("/api/roles", get(handlers::list_roles_handler))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::require_admin_role,
        ));

    let identified_routes = Router::new()
        .route("/api/users/names", get(handlers::list_user_names_handler))
        .merge(admin_routes)
        .layer(from_fn(middleware::require_identity));

    let allowed_origin = frontend_url
        .parse::<HeaderValue>()
        .map_err(|error| AppError::Validation(format!("invalid FRONTEND_URL: {error}")))?;

    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Ok(Router::new()
        .route("/health", get(handlers::health_handler))
        .merge(identified_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}
