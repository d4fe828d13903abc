use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    CreateProductRequest, ProductDetailResponse, ProductFilterParams, ProductResponse,
    ProductsListResponse,
};
use super::service::ProductService;

/// Browse active listings
#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("q" = Option<String>, Query, description = "Search by title"),
        ("seller_id" = Option<Uuid>, Query, description = "Only listings from this seller"),
        ("page" = Option<i64>, Query, description = "Page number (default 1)"),
        ("limit" = Option<i64>, Query, description = "Page size (default 10, max 100)"),
    ),
    responses(
        (status = 200, description = "Paginated list of active products", body = ProductsListResponse),
    ),
    tag = "Products"
)]
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
    Query(filters): Query<ProductFilterParams>,
) -> Result<Json<ProductsListResponse>, AppError> {
    let response = ProductService::get_products(&state.db, filters).await?;

    Ok(Json(response))
}

/// Fetch a single listing
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "The requested product", body = ProductDetailResponse),
        (status = 404, description = "No product with that id"),
    ),
    tag = "Products"
)]
#[instrument(skip(state, maybe_user))]
pub async fn get_product(
    State(state): State<AppState>,
    maybe_user: MaybeAuthUser,
    Path(product_id): Path<Uuid>,
) -> Result<Json<ProductDetailResponse>, AppError> {
    let product = ProductService::get_product_by_id(&state.db, product_id).await?;

    // A broken or absent token simply reads as an anonymous visitor here.
    let is_own_listing = maybe_user
        .0
        .as_ref()
        .and_then(|user| user.user_id().ok())
        .is_some_and(|id| id == product.seller_id);

    Ok(Json(ProductDetailResponse {
        success: true,
        data: product,
        is_own_listing,
    }))
}

/// Publish a new listing
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Listing created", body = ProductResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_product(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let product = ProductService::create_product(&state.db, auth_user.user_id()?, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            success: true,
            data: product,
        }),
    ))
}
