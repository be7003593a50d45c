use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::applications::application::domain::entities::SeekerApplicationRow;
use crate::modules::applications::application::ports::outgoing::application_repository::ApplicationRepository;
use crate::modules::profile::application::ports::outgoing::profile_repository::ProfileRepository;
use crate::modules::storage::application::domain::download_url::attachment_url;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMyApplicationsError {
    #[error("A job seeker profile is required")]
    ProfileRequired,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct MyApplicationRow {
    #[serde(flatten)]
    pub application: SeekerApplicationRow,
    pub download_url: Option<String>,
}

#[async_trait]
pub trait IGetMyApplicationsUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid)
        -> Result<Vec<MyApplicationRow>, GetMyApplicationsError>;
}

pub struct GetMyApplicationsUseCase<A>
where
    A: ApplicationRepository,
{
    application_repository: A,
    profile_repository: Arc<dyn ProfileRepository + Send + Sync>,
}

impl<A> GetMyApplicationsUseCase<A>
where
    A: ApplicationRepository,
{
    pub fn new(
        application_repository: A,
        profile_repository: Arc<dyn ProfileRepository + Send + Sync>,
    ) -> Self {
        Self {
            application_repository,
            profile_repository,
        }
    }
}

#[async_trait]
impl<A> IGetMyApplicationsUseCase for GetMyApplicationsUseCase<A>
where
    A: ApplicationRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<MyApplicationRow>, GetMyApplicationsError> {
        let seeker_id = self
            .profile_repository
            .seeker_profile_id_by_user(user_id)
            .await
            .map_err(|e| GetMyApplicationsError::RepositoryError(e.to_string()))?
            .ok_or(GetMyApplicationsError::ProfileRequired)?;

        let rows = self
            .application_repository
            .list_by_seeker(seeker_id)
            .await
            .map_err(|e| GetMyApplicationsError::RepositoryError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let download_url = row
                    .resume_url
                    .as_deref()
                    .map(|url| attachment_url(url, None));
                MyApplicationRow {
                    application: row,
                    download_url,
                }
            })
            .collect())
    }
}
