use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Unknown role")]
    InvalidRole,

    #[error("Password must be at least 8 characters")]
    WeakPassword,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterUserOutput {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: Role,
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(
        &self,
        full_name: String,
        email: String,
        password: String,
        role: String,
    ) -> Result<RegisterUserOutput, RegisterUserError>;
}

pub struct RegisterUserUseCase<R>
where
    R: UserRepository,
{
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        full_name: String,
        email: String,
        password: String,
        role: String,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        let role = Role::parse(&role).ok_or(RegisterUserError::InvalidRole)?;

        if !email_address::EmailAddress::is_valid(&email) {
            return Err(RegisterUserError::InvalidEmail);
        }

        if password.len() < 8 {
            return Err(RegisterUserError::WeakPassword);
        }

        let password_hash = self
            .password_hasher
            .hash(&password)
            .map_err(RegisterUserError::HashingFailed)?;

        let user = self
            .user_repository
            .create_user(CreateUserData {
                full_name: full_name.trim().to_string(),
                email,
                password_hash,
                role,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        Ok(RegisterUserOutput {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: user.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::modules::auth::application::domain::entities::User;

    struct MockUserRepo {
        create_result: Result<(), UserRepositoryError>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepo {
        async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
            self.create_result.clone()?;
            Ok(User {
                id: Uuid::new_v4(),
                full_name: data.full_name,
                email: data.email,
                password_hash: data.password_hash,
                role: data.role,
                is_verified: false,
                is_deleted: false,
                created_at: Utc::now(),
            })
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserRepositoryError> {
            unimplemented!("not needed for register tests")
        }

        async fn list_users(&self, _role: Option<Role>) -> Result<Vec<User>, UserRepositoryError> {
            unimplemented!("not needed for register tests")
        }

        async fn soft_delete(&self, _user_id: Uuid) -> Result<(), UserRepositoryError> {
            unimplemented!("not needed for register tests")
        }

        async fn hard_delete(&self, _user_id: Uuid) -> Result<(), UserRepositoryError> {
            unimplemented!("not needed for register tests")
        }
    }

    struct PlainHasher;

    impl PasswordHasher for PlainHasher {
        fn hash(&self, password: &str) -> Result<String, String> {
            Ok(format!("hashed:{}", password))
        }

        fn verify(&self, password: &str, hash: &str) -> Result<bool, String> {
            Ok(hash == format!("hashed:{}", password))
        }
    }

    fn use_case(
        create_result: Result<(), UserRepositoryError>,
    ) -> RegisterUserUseCase<MockUserRepo> {
        RegisterUserUseCase::new(MockUserRepo { create_result }, Arc::new(PlainHasher))
    }

    #[tokio::test]
    async fn test_register_success() {
        let result = use_case(Ok(()))
            .execute(
                "Jane Doe".to_string(),
                "jane@mail.test".to_string(),
                "correct horse".to_string(),
                "jobseeker".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(result.role, Role::Jobseeker);
        assert_eq!(result.email, "jane@mail.test");
    }

    #[tokio::test]
    async fn test_register_rejects_unknown_role() {
        let err = use_case(Ok(()))
            .execute(
                "Jane Doe".to_string(),
                "jane@mail.test".to_string(),
                "correct horse".to_string(),
                "superadmin".to_string(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RegisterUserError::InvalidRole));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_email() {
        let err = use_case(Ok(()))
            .execute(
                "Jane Doe".to_string(),
                "not-an-email".to_string(),
                "correct horse".to_string(),
                "employer".to_string(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RegisterUserError::InvalidEmail));
    }

    #[tokio::test]
    async fn test_register_rejects_short_password() {
        let err = use_case(Ok(()))
            .execute(
                "Jane Doe".to_string(),
                "jane@mail.test".to_string(),
                "short".to_string(),
                "employer".to_string(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RegisterUserError::WeakPassword));
    }

    #[tokio::test]
    async fn test_register_maps_duplicate_email() {
        let err = use_case(Err(UserRepositoryError::EmailAlreadyExists))
            .execute(
                "Jane Doe".to_string(),
                "jane@mail.test".to_string(),
                "correct horse".to_string(),
                "employer".to_string(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RegisterUserError::EmailAlreadyExists));
    }
}
