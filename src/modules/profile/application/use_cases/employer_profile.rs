use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::EmployerProfile;
use crate::modules::profile::application::ports::outgoing::profile_repository::{
    ProfileRepository, ProfileRepositoryError, UpsertEmployerProfileData,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum EmployerProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Company name must not be empty")]
    MissingCompanyName,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

fn map_repo_error(e: ProfileRepositoryError) -> EmployerProfileError {
    match e {
        ProfileRepositoryError::NotFound => EmployerProfileError::NotFound,
        ProfileRepositoryError::DatabaseError(msg) => EmployerProfileError::RepositoryError(msg),
    }
}

#[async_trait]
pub trait IEmployerProfileUseCase: Send + Sync {
    async fn fetch(&self, user_id: Uuid) -> Result<EmployerProfile, EmployerProfileError>;

    async fn upsert(
        &self,
        user_id: Uuid,
        data: UpsertEmployerProfileData,
    ) -> Result<EmployerProfile, EmployerProfileError>;

    async fn delete_picture(&self, user_id: Uuid) -> Result<(), EmployerProfileError>;
}

pub struct EmployerProfileUseCase<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> EmployerProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<R> IEmployerProfileUseCase for EmployerProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn fetch(&self, user_id: Uuid) -> Result<EmployerProfile, EmployerProfileError> {
        self.profile_repository
            .find_employer_by_user(user_id)
            .await
            .map_err(map_repo_error)?
            .ok_or(EmployerProfileError::NotFound)
    }

    async fn upsert(
        &self,
        user_id: Uuid,
        data: UpsertEmployerProfileData,
    ) -> Result<EmployerProfile, EmployerProfileError> {
        if data.company_name.trim().is_empty() {
            return Err(EmployerProfileError::MissingCompanyName);
        }

        self.profile_repository
            .upsert_employer(user_id, data)
            .await
            .map_err(map_repo_error)
    }

    async fn delete_picture(&self, user_id: Uuid) -> Result<(), EmployerProfileError> {
        self.profile_repository
            .clear_employer_picture(user_id)
            .await
            .map_err(map_repo_error)
    }
}
