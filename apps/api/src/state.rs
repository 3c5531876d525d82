use stafflink_application::{AccessControlService, DirectoryService, RoleReconciliationService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub role_service: RoleReconciliationService,
    pub directory_service: DirectoryService,
    pub access_control: AccessControlService,
    pub admin_role_ids: Vec<i64>,
}
