use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_product, get_product, get_products};

pub fn init_products_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_products).post(create_product))
        .route("/{id}", get(get_product))
}
