use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::ConversationSummary;

const SUMMARY_SELECT: &str = "SELECT c.id, c.product_id, p.title AS product_title, \
            c.buyer_id, b.email AS buyer_email, \
            c.seller_id, s.email AS seller_email, \
            (SELECT m.body FROM messages m \
             WHERE m.conversation_id = c.id \
             ORDER BY m.created_at DESC LIMIT 1) AS last_message, \
            c.created_at \
     FROM conversations c \
     JOIN products p ON p.id = c.product_id \
     JOIN users b ON b.id = c.buyer_id \
     JOIN users s ON s.id = c.seller_id";

pub struct ChatService;

impl ChatService {
    /// Every conversation on the platform. Admin moderation view.
    #[instrument(skip(db))]
    pub async fn get_all_conversations(db: &PgPool) -> Result<Vec<ConversationSummary>, AppError> {
        let query = format!("{} ORDER BY c.updated_at DESC", SUMMARY_SELECT);
        let conversations = sqlx::query_as::<_, ConversationSummary>(&query)
            .fetch_all(db)
            .await?;

        Ok(conversations)
    }

    /// Conversations the given user participates in, as buyer or seller.
    #[instrument(skip(db))]
    pub async fn get_user_conversations(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<ConversationSummary>, AppError> {
        let query = format!(
            "{} WHERE c.buyer_id = $1 OR c.seller_id = $1 ORDER BY c.updated_at DESC",
            SUMMARY_SELECT
        );
        let conversations = sqlx::query_as::<_, ConversationSummary>(&query)
            .bind(user_id)
            .fetch_all(db)
            .await?;

        Ok(conversations)
    }
}
