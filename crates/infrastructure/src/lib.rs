//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_identity_resolver;
mod postgres_role_assignment_repository;
mod postgres_role_catalog;

pub use http_identity_resolver::{HttpIdentityResolver, IdentitySourceConfig, ResolverRetry};
pub use postgres_role_assignment_repository::PostgresRoleAssignmentRepository;
pub use postgres_role_catalog::PostgresRoleCatalog;
