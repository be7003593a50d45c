use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Narrow read side used by the workflows to resolve notification
/// recipients without dragging in the whole user repository.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn email_by_user_id(&self, user_id: Uuid) -> Result<String, UserQueryError>;
}
