use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{Role, User};
use crate::modules::auth::application::ports::outgoing::user_repository::UserRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Role must be one of admin, employer, jobseeker")]
    InvalidRole,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListUsersUseCase: Send + Sync {
    async fn execute(&self, role: Option<&str>) -> Result<Vec<User>, ListUsersError>;
}

pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> IListUsersUseCase for ListUsersUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, role: Option<&str>) -> Result<Vec<User>, ListUsersError> {
        let filter = match role {
            Some(s) => Some(Role::parse(s).ok_or(ListUsersError::InvalidRole)?),
            None => None,
        };

        self.user_repository
            .list_users(filter)
            .await
            .map_err(|e| ListUsersError::RepositoryError(e.to_string()))
    }
}
