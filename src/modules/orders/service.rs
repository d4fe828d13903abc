use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

use super::model::{CreateOrderRequest, Order, OrderWithProduct, OrdersListResponse};

// Listing prices carry no upper bound, so price * quantity can exceed i64.
fn order_total_cents(price_cents: i64, quantity: i32) -> Result<i64, AppError> {
    price_cents
        .checked_mul(i64::from(quantity))
        .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Order total is too large")))
}

pub struct OrderService;

impl OrderService {
    /// Places an order against an active listing.
    ///
    /// Missing and inactive products both come back as 404 so callers
    /// cannot distinguish a withdrawn listing from one that never existed.
    #[instrument(skip(db, dto))]
    pub async fn create_order(
        db: &PgPool,
        buyer_id: Uuid,
        dto: CreateOrderRequest,
    ) -> Result<Order, AppError> {
        #[derive(sqlx::FromRow)]
        struct ProductForOrder {
            seller_id: Uuid,
            price_cents: i64,
        }

        let product = sqlx::query_as::<_, ProductForOrder>(
            "SELECT seller_id, price_cents FROM products WHERE id = $1 AND status = 'active'",
        )
        .bind(dto.product_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Product not found")))?;

        if product.seller_id == buyer_id {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "You cannot order your own listing"
            )));
        }

        let total_cents = order_total_cents(product.price_cents, dto.quantity)?;

        let order = sqlx::query_as::<_, Order>(
            "INSERT INTO orders (buyer_id, product_id, quantity, total_cents)
             VALUES ($1, $2, $3, $4)
             RETURNING id, buyer_id, product_id, quantity, total_cents, status, created_at, updated_at",
        )
        .bind(buyer_id)
        .bind(dto.product_id)
        .bind(dto.quantity)
        .bind(total_cents)
        .fetch_one(db)
        .await?;

        Ok(order)
    }

    /// Lists the caller's own orders, newest first.
    #[instrument(skip(db))]
    pub async fn get_my_orders(
        db: &PgPool,
        buyer_id: Uuid,
        pagination: PaginationParams,
    ) -> Result<OrdersListResponse, AppError> {
        let limit = pagination.limit();
        let offset = pagination.offset();

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders WHERE buyer_id = $1")
            .bind(buyer_id)
            .fetch_one(db)
            .await?;

        let orders = sqlx::query_as::<_, OrderWithProduct>(
            "SELECT o.id, o.buyer_id, o.product_id, p.title AS product_title, \
                    o.quantity, o.total_cents, o.status, o.created_at, o.updated_at \
             FROM orders o \
             JOIN products p ON p.id = o.product_id \
             WHERE o.buyer_id = $1 \
             ORDER BY o.created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(buyer_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;

        Ok(OrdersListResponse {
            success: true,
            data: orders,
            pagination: PaginationMeta::new(&pagination, total),
        })
    }
}
