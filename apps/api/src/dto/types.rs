use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Role payload from the local catalog.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub id: i64,
    pub name: String,
}

/// Name-picker entry from the identity provider directory.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-name-response.ts"
)]
pub struct UserNameResponse {
    pub id: i64,
    pub full_name: String,
}

/// Full directory listing entry from the identity provider.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/directory-user-response.ts"
)]
pub struct DirectoryUserResponse {
    pub id: i64,
    pub staff_id: String,
    pub full_name: String,
    pub preferred_name: Option<String>,
    pub staff_type: String,
    pub email: String,
    pub company: String,
    pub department: String,
    pub building: String,
    pub status: String,
    pub job_title: Option<String>,
}

/// Composed user detail: external profile plus the local role overlay.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-detail-response.ts"
)]
pub struct UserDetailResponse {
    pub id: i64,
    pub staff_id: String,
    pub preferred_name: Option<String>,
    pub staff_type: String,
    pub email: String,
    pub company: String,
    pub department: String,
    pub building: String,
    pub status: String,
    pub updated_by: Option<String>,
    pub updated_at: Option<String>,
    pub job_title: Option<String>,
    pub roles: Vec<RoleResponse>,
    pub roles_updated_at: Option<String>,
    pub roles_updated_by: Option<String>,
}

/// Request body replacing a user's role set.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assign-roles-request.ts"
)]
pub struct AssignRolesRequest {
    pub role_ids: Vec<i64>,
}

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}
