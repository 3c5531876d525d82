use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;

use stafflink_application::DirectoryFilter;
use stafflink_core::ActorIdentity;
use stafflink_domain::StaffId;

use crate::dto::{
    AssignRolesRequest, DirectoryUserResponse, HealthResponse, RoleResponse, UserDetailResponse,
    UserNameResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod health;
mod roles;
mod users;

pub use health::health_handler;
pub use roles::list_roles_handler;
pub use users::{
    assign_roles_handler, list_user_names_handler, list_users_handler, user_detail_handler,
};
