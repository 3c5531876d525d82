mod conversions;
mod types;

pub use types::{
    AssignRolesRequest, DirectoryUserResponse, HealthResponse, RoleResponse, UserDetailResponse,
    UserNameResponse,
};
