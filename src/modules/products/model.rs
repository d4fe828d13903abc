use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::{PaginationMeta, PaginationParams};
use crate::utils::serde::deserialize_optional_uuid;

/// A marketplace listing. Prices are integer cents to keep arithmetic
/// exact.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price_cents: i64,
    /// `active` while purchasable; anything else hides the listing.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,
    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Price must be a positive amount of cents"))]
    pub price_cents: i64,
}

/// Query parameters accepted by the public listing endpoint.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductFilterParams {
    /// Matches against the listing title, case-insensitively.
    pub q: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub seller_id: Option<Uuid>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub success: bool,
    pub data: Product,
}

/// Detail view; `is_own_listing` lets the client swap the buy button for
/// edit controls without decoding the token itself.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetailResponse {
    pub success: bool,
    pub data: Product,
    pub is_own_listing: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductsListResponse {
    pub success: bool,
    pub data: Vec<Product>,
    pub pagination: PaginationMeta,
}
