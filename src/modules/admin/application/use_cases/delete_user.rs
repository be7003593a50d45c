use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, hard: bool) -> Result<(), DeleteUserError>;
}

pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> IDeleteUserUseCase for DeleteUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    /// Soft delete keeps the row so historical jobs and applications stay
    /// joinable; hard delete removes it and cascades per schema.
    async fn execute(&self, user_id: Uuid, hard: bool) -> Result<(), DeleteUserError> {
        let result = if hard {
            self.user_repository.hard_delete(user_id).await
        } else {
            self.user_repository.soft_delete(user_id).await
        };

        result.map_err(|e| match e {
            UserRepositoryError::NotFound => DeleteUserError::NotFound,
            e => DeleteUserError::RepositoryError(e.to_string()),
        })
    }
}
