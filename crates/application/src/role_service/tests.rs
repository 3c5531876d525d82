use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use stafflink_core::{AppError, AppResult};
use stafflink_domain::{ExternalUser, Role, RoleGrant, StaffId, StaffProfile};

use crate::reconciliation_ports::{
    DirectoryFilter, IdentityLookup, ReplaceAssignments, RoleAssignmentRepository, RoleCatalog,
};

use super::RoleReconciliationService;

struct FakeIdentityLookup {
    users: HashMap<i64, ExternalUser>,
    upstream_down: bool,
}

impl FakeIdentityLookup {
    fn with_users(users: Vec<ExternalUser>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.id.as_i64(), user))
                .collect(),
            upstream_down: false,
        }
    }
}

#[async_trait]
impl IdentityLookup for FakeIdentityLookup {
    async fn find_user(&self, staff_id: StaffId) -> AppResult<ExternalUser> {
        if self.upstream_down {
            return Err(AppError::Upstream("identity provider offline".to_owned()));
        }

        self.users
            .get(&staff_id.as_i64())
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("user '{staff_id}' was not found")))
    }

    async fn list_users(&self, _filter: &DirectoryFilter) -> AppResult<Vec<ExternalUser>> {
        Ok(self.users.values().cloned().collect())
    }
}

struct FakeRoleCatalog {
    roles: Vec<Role>,
}

#[async_trait]
impl RoleCatalog for FakeRoleCatalog {
    async fn find_roles_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Role>> {
        Ok(self
            .roles
            .iter()
            .filter(|role| ids.contains(&role.id))
            .cloned()
            .collect())
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        Ok(self.roles.clone())
    }
}

#[derive(Default)]
struct FakeAssignmentRepository {
    role_names: HashMap<i64, String>,
    shadow_users: Mutex<Vec<i64>>,
    grants: Mutex<HashMap<i64, Vec<RoleGrant>>>,
}

impl FakeAssignmentRepository {
    fn with_role_names(roles: &[Role]) -> Self {
        Self {
            role_names: roles
                .iter()
                .map(|role| (role.id, role.name.clone()))
                .collect(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl RoleAssignmentRepository for FakeAssignmentRepository {
    async fn grants_for_user(&self, user_id: StaffId) -> AppResult<Vec<RoleGrant>> {
        let mut grants = self
            .grants
            .lock()
            .await
            .get(&user_id.as_i64())
            .cloned()
            .unwrap_or_default();
        grants.sort_by(|left, right| left.role.name.cmp(&right.role.name));
        Ok(grants)
    }

    async fn replace_for_user(&self, input: ReplaceAssignments) -> AppResult<()> {
        let mut shadow_users = self.shadow_users.lock().await;
        if !shadow_users.contains(&input.user_id.as_i64()) {
            shadow_users.push(input.user_id.as_i64());
        }

        let granted_at = Utc::now();
        let rows = input
            .role_ids
            .iter()
            .map(|role_id| RoleGrant {
                role: Role {
                    id: *role_id,
                    name: self
                        .role_names
                        .get(role_id)
                        .cloned()
                        .unwrap_or_else(|| role_id.to_string()),
                },
                granted_by: input.granted_by,
                granted_at,
            })
            .collect();

        self.grants.lock().await.insert(input.user_id.as_i64(), rows);
        Ok(())
    }

    async fn role_ids_for_user(&self, user_id: StaffId) -> AppResult<Vec<i64>> {
        Ok(self
            .grants
            .lock()
            .await
            .get(&user_id.as_i64())
            .map(|rows| rows.iter().map(|grant| grant.role.id).collect())
            .unwrap_or_default())
    }
}

fn external_user(id: i64, full_name: &str) -> ExternalUser {
    ExternalUser {
        id: StaffId::new(id),
        staff: StaffProfile {
            full_name: full_name.to_owned(),
            ..StaffProfile::default()
        },
        department: None,
        building: None,
        company: None,
    }
}

fn catalog_roles() -> Vec<Role> {
    vec![
        Role {
            id: 1,
            name: "system management".to_owned(),
        },
        Role {
            id: 2,
            name: "user management".to_owned(),
        },
        Role {
            id: 3,
            name: "reporting".to_owned(),
        },
    ]
}

fn service_with(
    users: Vec<ExternalUser>,
) -> (RoleReconciliationService, Arc<FakeAssignmentRepository>) {
    let roles = catalog_roles();
    let assignments = Arc::new(FakeAssignmentRepository::with_role_names(&roles));
    let service = RoleReconciliationService::new(
        Arc::new(FakeIdentityLookup::with_users(users)),
        Arc::new(FakeRoleCatalog { roles }),
        assignments.clone(),
    );
    (service, assignments)
}

#[tokio::test]
async fn assign_rejects_unknown_role_ids_and_keeps_prior_grants() {
    let (service, assignments) =
        service_with(vec![external_user(42, "Mira Chen"), external_user(7, "Priya Patel")]);

    let seeded = service
        .assign_roles(StaffId::new(42), &[1], StaffId::new(7))
        .await;
    assert!(seeded.is_ok());

    let result = service
        .assign_roles(StaffId::new(42), &[1, 99], StaffId::new(7))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    let ids = assignments.role_ids_for_user(StaffId::new(42)).await;
    assert!(matches!(ids, Ok(ref held) if held == &vec![1]));
}

#[tokio::test]
async fn assign_names_every_missing_role_id() {
    let (service, _) = service_with(vec![external_user(42, "Mira Chen")]);

    let result = service
        .assign_roles(StaffId::new(42), &[99, 1, 100], StaffId::new(7))
        .await;

    match result {
        Err(AppError::Validation(message)) => {
            assert_eq!(message, "unknown role ids: 99, 100");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn duplicate_requested_ids_do_not_cause_false_rejection() {
    let (service, assignments) = service_with(vec![external_user(42, "Mira Chen")]);

    let result = service
        .assign_roles(StaffId::new(42), &[1, 1, 2, 2, 2], StaffId::new(7))
        .await;

    assert!(result.is_ok());
    let ids = assignments.role_ids_for_user(StaffId::new(42)).await;
    assert!(matches!(ids, Ok(ref held) if held == &vec![1, 2]));
}

#[tokio::test]
async fn assign_replaces_the_whole_role_set() {
    let (service, _) = service_with(vec![
        external_user(42, "Mira Chen"),
        external_user(7, "Priya Patel"),
        external_user(9, "Jonas Weber"),
    ]);

    let first = service
        .assign_roles(StaffId::new(42), &[1, 2], StaffId::new(7))
        .await;
    assert!(first.is_ok());

    let second = service
        .assign_roles(StaffId::new(42), &[3], StaffId::new(9))
        .await;
    assert!(second.is_ok());

    let detail = service.user_detail(StaffId::new(42)).await;
    match detail {
        Ok(detail) => {
            let role_ids: Vec<i64> = detail.roles.roles.iter().map(|role| role.id).collect();
            assert_eq!(role_ids, vec![3]);
            assert_eq!(detail.roles.updated_by.as_deref(), Some("Jonas Weber"));
            assert!(detail.roles.updated_at.is_some());
        }
        Err(error) => panic!("detail read failed: {error}"),
    }
}

#[tokio::test]
async fn assign_to_unknown_user_fails_before_any_mutation() {
    let (service, assignments) = service_with(vec![external_user(7, "Priya Patel")]);

    let result = service
        .assign_roles(StaffId::new(42), &[1], StaffId::new(7))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(assignments.shadow_users.lock().await.is_empty());
}

#[tokio::test]
async fn detail_for_user_without_grants_has_empty_roles_and_no_attribution() {
    let (service, _) = service_with(vec![external_user(42, "Mira Chen")]);

    let detail = service.user_detail(StaffId::new(42)).await;

    match detail {
        Ok(detail) => {
            assert!(detail.roles.roles.is_empty());
            assert!(detail.roles.updated_at.is_none());
            assert!(detail.roles.updated_by.is_none());
        }
        Err(error) => panic!("detail read failed: {error}"),
    }
}

#[tokio::test]
async fn detail_fails_upstream_when_grantor_cannot_be_resolved() {
    // Grantor 7 has left the identity provider since the grant was written.
    let (service, assignments) = service_with(vec![external_user(42, "Mira Chen")]);
    let seeded = assignments
        .replace_for_user(ReplaceAssignments {
            user_id: StaffId::new(42),
            role_ids: vec![1],
            granted_by: StaffId::new(7),
        })
        .await;
    assert!(seeded.is_ok());

    let detail = service.user_detail(StaffId::new(42)).await;
    assert!(matches!(detail, Err(AppError::Upstream(_))));
}

#[tokio::test]
async fn empty_role_set_clears_all_grants() {
    let (service, _) = service_with(vec![
        external_user(42, "Mira Chen"),
        external_user(7, "Priya Patel"),
    ]);

    let granted = service
        .assign_roles(StaffId::new(42), &[1, 2], StaffId::new(7))
        .await;
    assert!(granted.is_ok());

    let cleared = service
        .assign_roles(StaffId::new(42), &[], StaffId::new(7))
        .await;
    assert!(cleared.is_ok());

    let detail = service.user_detail(StaffId::new(42)).await;
    match detail {
        Ok(detail) => {
            assert!(detail.roles.roles.is_empty());
            assert!(detail.roles.updated_by.is_none());
        }
        Err(error) => panic!("detail read failed: {error}"),
    }
}

#[tokio::test]
async fn repeated_assigns_create_one_shadow_user() {
    let (service, assignments) = service_with(vec![
        external_user(42, "Mira Chen"),
        external_user(7, "Priya Patel"),
    ]);

    for _ in 0..2 {
        let result = service
            .assign_roles(StaffId::new(42), &[1], StaffId::new(7))
            .await;
        assert!(result.is_ok());
    }

    assert_eq!(*assignments.shadow_users.lock().await, vec![42]);
}

#[tokio::test]
async fn detail_is_only_as_available_as_the_identity_provider() {
    let roles = catalog_roles();
    let assignments = Arc::new(FakeAssignmentRepository::with_role_names(&roles));
    let service = RoleReconciliationService::new(
        Arc::new(FakeIdentityLookup {
            users: HashMap::new(),
            upstream_down: true,
        }),
        Arc::new(FakeRoleCatalog { roles }),
        assignments,
    );

    let detail = service.user_detail(StaffId::new(42)).await;

    assert!(matches!(detail, Err(AppError::Upstream(_))));
}

#[tokio::test]
async fn detail_projects_roles_ordered_by_name_with_grantor_attribution() {
    let (service, _) = service_with(vec![
        external_user(42, "Mira Chen"),
        external_user(7, "Priya Patel"),
    ]);

    let granted = service
        .assign_roles(StaffId::new(42), &[1, 2], StaffId::new(7))
        .await;
    assert!(granted.is_ok());

    let detail = service.user_detail(StaffId::new(42)).await;
    match detail {
        Ok(detail) => {
            let names: Vec<&str> = detail
                .roles
                .roles
                .iter()
                .map(|role| role.name.as_str())
                .collect();
            assert_eq!(names, vec!["system management", "user management"]);
            assert_eq!(detail.roles.updated_by.as_deref(), Some("Priya Patel"));
        }
        Err(error) => panic!("detail read failed: {error}"),
    }
}
