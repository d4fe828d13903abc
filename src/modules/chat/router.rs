use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_conversations, get_my_conversations};

/// Routes available to any authenticated user.
pub fn init_chat_router() -> Router<AppState> {
    Router::new().route("/mine", get(get_my_conversations))
}

/// Routes that the top-level router wraps in the admin gate.
pub fn init_chat_admin_router() -> Router<AppState> {
    Router::new().route("/conversations", get(get_conversations))
}
