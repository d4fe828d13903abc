use axum::{Json, extract::State};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::ConversationsResponse;
use super::service::ChatService;

/// List the authenticated user's conversations
#[utoipa::path(
    get,
    path = "/api/chat/mine",
    responses(
        (status = 200, description = "Conversations the caller participates in", body = ConversationsResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Chat"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_my_conversations(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<ConversationsResponse>, AppError> {
    let conversations =
        ChatService::get_user_conversations(&state.db, auth_user.user_id()?).await?;

    Ok(Json(ConversationsResponse {
        success: true,
        data: conversations,
    }))
}

/// List every conversation on the platform (admin only)
#[utoipa::path(
    get,
    path = "/api/chat/conversations",
    responses(
        (status = 200, description = "All conversations", body = ConversationsResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Authenticated but not an admin"),
    ),
    security(("bearer_auth" = [])),
    tag = "Chat"
)]
#[instrument(skip(state))]
pub async fn get_conversations(
    State(state): State<AppState>,
) -> Result<Json<ConversationsResponse>, AppError> {
    let conversations = ChatService::get_all_conversations(&state.db).await?;

    Ok(Json(ConversationsResponse {
        success: true,
        data: conversations,
    }))
}
