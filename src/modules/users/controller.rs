use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{UserFilterParams, UserResponse, UsersListResponse};
use super::service::UserService;

/// Get the authenticated user's own profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Profile of the authenticated user", body = UserResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = UserService::get_user_by_id(&state.db, auth_user.user_id()?).await?;

    Ok(Json(UserResponse {
        success: true,
        data: user,
    }))
}

/// List user accounts (admin only)
#[utoipa::path(
    get,
    path = "/api/users",
    params(
        ("q" = Option<String>, Query, description = "Search by name or email"),
        ("role" = Option<String>, Query, description = "Filter by exact role"),
        ("page" = Option<i64>, Query, description = "Page number (default 1)"),
        ("limit" = Option<i64>, Query, description = "Page size (default 10, max 100)"),
    ),
    responses(
        (status = 200, description = "Paginated list of users", body = UsersListResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Authenticated but not an admin"),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    Query(filters): Query<UserFilterParams>,
) -> Result<Json<UsersListResponse>, AppError> {
    let response = UserService::get_users(&state.db, filters).await?;

    Ok(Json(response))
}
