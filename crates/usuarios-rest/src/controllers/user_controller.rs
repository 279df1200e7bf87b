//! User CRUD controller.

use crate::{
    extractors::PaginationQuery,
    responses::{ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;
use usuarios_core::{Page, UserId};
use usuarios_service::{UserRequest, UserResponse};

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Create a new user. The backend assigns the id.
///
/// Answers 200 with the created entity, matching the existing API
/// contract (not 201).
async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UserRequest>,
) -> ApiResult<UserResponse> {
    debug!("Create user request");

    let response = state.user_service.create_user(request).await?;
    ok(response)
}

/// Get a user by ID.
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<UserResponse> {
    debug!("Get user request: {}", id);

    let response = state.user_service.get_user(UserId::from_i64(id)).await?;
    ok(response)
}

/// List users with pagination.
async fn list_users(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<Page<UserResponse>> {
    debug!("List users request");

    let response = state.user_service.list_users(pagination.into()).await?;
    ok(response)
}

/// Overwrite a user's data fields. Any id in the body is ignored; the
/// path id always wins.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UserRequest>,
) -> ApiResult<UserResponse> {
    debug!("Update user request: {}", id);

    let response = state
        .user_service
        .update_user(UserId::from_i64(id), request)
        .await?;
    ok(response)
}

/// Delete a user. Answers 200 with an empty body.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete user request: {}", id);

    state.user_service.delete_user(UserId::from_i64(id)).await?;
    Ok(StatusCode::OK)
}
