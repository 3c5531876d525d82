use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use stafflink_core::{ActorIdentity, AppError};

use crate::error::ApiResult;
use crate::state::AppState;

/// Header carrying the authenticated caller's external id.
///
/// The SSO reverse proxy authenticates every request before it reaches this
/// service and injects the id here; the service trusts the header and never
/// performs authentication itself.
pub const STAFF_ID_HEADER: &str = "x-staff-user-id";

pub async fn require_identity(mut request: Request, next: Next) -> ApiResult<Response> {
    let staff_id = request
        .headers()
        .get(STAFF_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<i64>().ok())
        .ok_or_else(|| {
            AppError::Unauthorized("missing authenticated staff identity".to_owned())
        })?;

    request.extensions_mut().insert(ActorIdentity::new(staff_id));
    Ok(next.run(request).await)
}

pub async fn require_admin_role(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let actor = request
        .extensions()
        .get::<ActorIdentity>()
        .copied()
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    state
        .access_control
        .require_any_role(&actor, &state.admin_role_ids)
        .await?;

    Ok(next.run(request).await)
}
