use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, User};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    /// Looks up a user by exact email match, soft-deleted included; the
    /// login flow decides what a deleted account means.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    async fn list_users(&self, role: Option<Role>) -> Result<Vec<User>, UserRepositoryError>;

    /// Marks the account deleted, keeping the row. Zero affected rows maps
    /// to NotFound.
    async fn soft_delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;

    async fn hard_delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
