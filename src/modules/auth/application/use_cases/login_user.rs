use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginUserError {
    // Unknown email and wrong password collapse into one variant so the
    // response does not reveal which emails are registered.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is disabled")]
    AccountDisabled,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserOutput {
    pub user_id: Uuid,
    pub full_name: String,
    pub role: Role,
    pub access_token: String,
}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, email: String, password: String)
        -> Result<LoginUserOutput, LoginUserError>;
}

pub struct LoginUserUseCase<R>
where
    R: UserRepository,
{
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> LoginUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(
        user_repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> ILoginUserUseCase for LoginUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        email: String,
        password: String,
    ) -> Result<LoginUserOutput, LoginUserError> {
        let user = self
            .user_repository
            .find_by_email(&email)
            .await
            .map_err(|e| match e {
                UserRepositoryError::DatabaseError(msg) => LoginUserError::RepositoryError(msg),
                other => LoginUserError::RepositoryError(other.to_string()),
            })?
            .ok_or(LoginUserError::InvalidCredentials)?;

        if user.is_deleted {
            return Err(LoginUserError::AccountDisabled);
        }

        let matches = self
            .password_hasher
            .verify(&password, &user.password_hash)
            .map_err(LoginUserError::RepositoryError)?;

        if !matches {
            return Err(LoginUserError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| LoginUserError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserOutput {
            user_id: user.id,
            full_name: user.full_name,
            role: user.role,
            access_token,
        })
    }
}
