use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::utils::pagination::{PaginationMeta, PaginationParams};

/// Privilege tier carried in the access token and the `users.role` column.
///
/// Authorization checks are plain membership tests against these variants.
/// No role implies another, so a new tier means a new variant, not a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Buyer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Buyer => "buyer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "buyer" => Ok(UserRole::Buyer),
            other => Err(anyhow::anyhow!("unknown role: {other}")),
        }
    }
}

/// A user account as stored, minus the password hash. Safe to serialize
/// into responses.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Query parameters accepted by the admin user listing.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserFilterParams {
    /// Matches against name or email, case-insensitively.
    pub q: Option<String>,
    /// Exact role filter, e.g. `buyer`.
    pub role: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub success: bool,
    pub data: User,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UsersListResponse {
    pub success: bool,
    pub data: Vec<User>,
    pub pagination: PaginationMeta,
}
