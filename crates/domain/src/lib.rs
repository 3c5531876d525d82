//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod role;
mod staff;

pub use role::{Role, RoleGrant, SYSTEM_MANAGEMENT_ROLE_ID, USER_MANAGEMENT_ROLE_ID};
pub use staff::{ExternalUser, ExternalUserSummary, NamedRef, StaffId, StaffProfile};
