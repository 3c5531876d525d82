use super::*;

pub async fn list_user_names_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<UserNameResponse>>> {
    let names = state
        .directory_service
        .list_user_names(&DirectoryFilter::new(params))
        .await?
        .into_iter()
        .map(UserNameResponse::from)
        .collect();

    Ok(Json(names))
}

pub async fn list_users_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<DirectoryUserResponse>>> {
    let users = state
        .directory_service
        .list_users(&DirectoryFilter::new(params))
        .await?
        .into_iter()
        .map(DirectoryUserResponse::from)
        .collect();

    Ok(Json(users))
}

pub async fn user_detail_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<UserDetailResponse>> {
    let detail = state.role_service.user_detail(StaffId::new(user_id)).await?;

    Ok(Json(UserDetailResponse::from(detail)))
}

pub async fn assign_roles_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(user_id): Path<i64>,
    Json(payload): Json<AssignRolesRequest>,
) -> ApiResult<StatusCode> {
    state
        .role_service
        .assign_roles(
            StaffId::new(user_id),
            &payload.role_ids,
            StaffId::new(actor.staff_id()),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
