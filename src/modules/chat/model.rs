use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A buyer-seller thread attached to one listing, with participant and
/// product labels joined in plus the most recent message body for
/// previews. Message bodies live in the `messages` table.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ConversationSummary {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_title: String,
    pub buyer_id: Uuid,
    pub buyer_email: String,
    pub seller_id: Uuid,
    pub seller_email: String,
    pub last_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConversationsResponse {
    pub success: bool,
    pub data: Vec<ConversationSummary>,
}
