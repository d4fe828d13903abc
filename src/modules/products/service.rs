use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

use super::model::{CreateProductRequest, Product, ProductFilterParams, ProductsListResponse};

pub struct ProductService;

impl ProductService {
    #[instrument(skip(db, dto))]
    pub async fn create_product(
        db: &PgPool,
        seller_id: Uuid,
        dto: CreateProductRequest,
    ) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (seller_id, title, description, price_cents)
             VALUES ($1, $2, $3, $4)
             RETURNING id, seller_id, title, description, price_cents, status, created_at, updated_at",
        )
        .bind(seller_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.price_cents)
        .fetch_one(db)
        .await?;

        Ok(product)
    }

    /// Lists active products with optional title search and seller filter,
    /// newest first.
    #[instrument(skip(db))]
    pub async fn get_products(
        db: &PgPool,
        filters: ProductFilterParams,
    ) -> Result<ProductsListResponse, AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let mut where_clause = String::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(q) = &filters.q {
            params.push(format!("%{}%", q));
            where_clause.push_str(&format!(" AND title ILIKE ${}", params.len()));
        }

        if let Some(seller_id) = &filters.seller_id {
            // Bound as text and cast so every parameter rides the same
            // Vec<String>.
            params.push(seller_id.to_string());
            where_clause.push_str(&format!(" AND seller_id = ${}::uuid", params.len()));
        }

        let count_query = format!(
            "SELECT COUNT(*) FROM products WHERE status = 'active'{}",
            where_clause
        );
        let mut count_sql = sqlx::query_scalar::<_, i64>(&count_query);
        for param in &params {
            count_sql = count_sql.bind(param);
        }
        let total = count_sql.fetch_one(db).await?;

        let data_query = format!(
            "SELECT id, seller_id, title, description, price_cents, status, created_at, updated_at \
             FROM products WHERE status = 'active'{} \
             ORDER BY created_at DESC LIMIT {} OFFSET {}",
            where_clause, limit, offset
        );
        let mut data_sql = sqlx::query_as::<_, Product>(&data_query);
        for param in &params {
            data_sql = data_sql.bind(param);
        }
        let products = data_sql.fetch_all(db).await?;

        Ok(ProductsListResponse {
            success: true,
            data: products,
            pagination: PaginationMeta::new(&filters.pagination, total),
        })
    }

    #[instrument(skip(db))]
    pub async fn get_product_by_id(db: &PgPool, product_id: Uuid) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, seller_id, title, description, price_cents, status, created_at, updated_at \
             FROM products WHERE id = $1",
        )
        .bind(product_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Product not found")))?;

        Ok(product)
    }
}
