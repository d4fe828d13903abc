use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

use super::model::{User, UserFilterParams, UsersListResponse};

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_user_by_id(db: &PgPool, user_id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }

    /// Lists accounts with optional text search and role filter, newest first.
    #[instrument(skip(db))]
    pub async fn get_users(
        db: &PgPool,
        filters: UserFilterParams,
    ) -> Result<UsersListResponse, AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        // Filters are appended as numbered placeholders; values only ever
        // travel through bind parameters.
        let mut where_clause = String::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(q) = &filters.q {
            params.push(format!("%{}%", q));
            where_clause.push_str(&format!(
                " AND (name ILIKE ${n} OR email ILIKE ${n})",
                n = params.len()
            ));
        }

        if let Some(role) = &filters.role {
            params.push(role.clone());
            where_clause.push_str(&format!(" AND role = ${}", params.len()));
        }

        let count_query = format!("SELECT COUNT(*) FROM users WHERE true{}", where_clause);
        let mut count_sql = sqlx::query_scalar::<_, i64>(&count_query);
        for param in &params {
            count_sql = count_sql.bind(param);
        }
        let total = count_sql.fetch_one(db).await?;

        let data_query = format!(
            "SELECT id, name, email, role, created_at, updated_at FROM users WHERE true{} \
             ORDER BY created_at DESC LIMIT {} OFFSET {}",
            where_clause, limit, offset
        );
        let mut data_sql = sqlx::query_as::<_, User>(&data_query);
        for param in &params {
            data_sql = data_sql.bind(param);
        }
        let users = data_sql.fetch_all(db).await?;

        Ok(UsersListResponse {
            success: true,
            data: users,
            pagination: PaginationMeta::new(&filters.pagination, total),
        })
    }
}
