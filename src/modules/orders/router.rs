use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_order, get_my_orders};

pub fn init_orders_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/my", get(get_my_orders))
}
