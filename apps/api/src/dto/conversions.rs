use stafflink_application::UserDetail;
use stafflink_domain::{ExternalUser, ExternalUserSummary, NamedRef, Role};

use super::types::{DirectoryUserResponse, RoleResponse, UserDetailResponse, UserNameResponse};

impl From<Role> for RoleResponse {
    fn from(value: Role) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

impl From<ExternalUserSummary> for UserNameResponse {
    fn from(value: ExternalUserSummary) -> Self {
        Self {
            id: value.id.as_i64(),
            full_name: value.full_name,
        }
    }
}

impl From<ExternalUser> for DirectoryUserResponse {
    fn from(value: ExternalUser) -> Self {
        Self {
            id: value.id.as_i64(),
            staff_id: value.staff.staff_id,
            full_name: value.staff.full_name,
            preferred_name: value.staff.preferred_name,
            staff_type: value.staff.staff_type.name,
            email: value.staff.email,
            company: named_or_dash(value.company),
            department: named_or_dash(value.department),
            building: named_or_dash(value.building),
            status: value.staff.status,
            job_title: value.staff.job_title,
        }
    }
}

impl From<UserDetail> for UserDetailResponse {
    fn from(value: UserDetail) -> Self {
        let profile = value.profile;

        Self {
            id: profile.id.as_i64(),
            staff_id: profile.staff.staff_id,
            preferred_name: profile.staff.preferred_name,
            staff_type: profile.staff.staff_type.name,
            email: profile.staff.email,
            company: named_or_dash(profile.company),
            department: named_or_dash(profile.department),
            building: named_or_dash(profile.building),
            status: profile.staff.status,
            updated_by: profile.staff.updated_by,
            updated_at: profile.staff.updated_at.map(|value| value.to_rfc3339()),
            job_title: profile.staff.job_title,
            roles: value
                .roles
                .roles
                .into_iter()
                .map(RoleResponse::from)
                .collect(),
            roles_updated_at: value.roles.updated_at.map(|value| value.to_rfc3339()),
            roles_updated_by: value.roles.updated_by,
        }
    }
}

fn named_or_dash(value: Option<NamedRef>) -> String {
    value
        .map(|named| named.name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "-".to_owned())
}
