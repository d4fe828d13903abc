use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_me, get_users};

/// Routes available to any authenticated user.
pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

/// Routes that the top-level router wraps in the admin gate.
pub fn init_users_admin_router() -> Router<AppState> {
    Router::new().route("/", get(get_users))
}
