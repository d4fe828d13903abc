use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;
use crate::validator::ValidatedJson;

use super::model::{CreateOrderRequest, OrderResponse, OrdersListResponse};
use super::service::OrderService;

/// Place an order for a listing
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = OrderResponse),
        (status = 400, description = "Validation failed or ordering own listing"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Product missing or no longer active"),
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_order(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    let order = OrderService::create_order(&state.db, auth_user.user_id()?, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderResponse {
            success: true,
            data: order,
        }),
    ))
}

/// List the authenticated user's orders
#[utoipa::path(
    get,
    path = "/api/orders/my",
    params(
        ("page" = Option<i64>, Query, description = "Page number (default 1)"),
        ("limit" = Option<i64>, Query, description = "Page size (default 10, max 100)"),
    ),
    responses(
        (status = 200, description = "Paginated list of the caller's orders", body = OrdersListResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_my_orders(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<OrdersListResponse>, AppError> {
    let response =
        OrderService::get_my_orders(&state.db, auth_user.user_id()?, pagination).await?;

    Ok(Json(response))
}
