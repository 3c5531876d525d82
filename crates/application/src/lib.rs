//! Application services and ports.

#![forbid(unsafe_code)]

mod access_service;
mod directory_service;
mod reconciliation_ports;
mod role_service;

pub use access_service::AccessControlService;
pub use directory_service::DirectoryService;
pub use reconciliation_ports::{
    DirectoryFilter, IdentityLookup, ReplaceAssignments, RoleAssignmentRepository, RoleCatalog,
};
pub use role_service::{AttributedRoles, RoleReconciliationService, UserDetail};
