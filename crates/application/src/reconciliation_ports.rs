mod assignments;
mod catalog;
mod identity;

pub use assignments::{ReplaceAssignments, RoleAssignmentRepository};
pub use catalog::RoleCatalog;
pub use identity::{DirectoryFilter, IdentityLookup};
