use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::job::application::domain::Job;
use crate::modules::job::application::ports::outgoing::job_repository::{
    JobRepository, JobRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPublicSingleJobError {
    #[error("Job not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetPublicSingleJobUseCase: Send + Sync {
    async fn execute(&self, job_id: Uuid) -> Result<Job, GetPublicSingleJobError>;
}

pub struct GetPublicSingleJobUseCase<R>
where
    R: JobRepository,
{
    job_repository: R,
}

impl<R> GetPublicSingleJobUseCase<R>
where
    R: JobRepository,
{
    pub fn new(job_repository: R) -> Self {
        Self { job_repository }
    }
}

#[async_trait]
impl<R> IGetPublicSingleJobUseCase for GetPublicSingleJobUseCase<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(&self, job_id: Uuid) -> Result<Job, GetPublicSingleJobError> {
        self.job_repository
            .get_approved(job_id)
            .await
            .map_err(|e| match e {
                JobRepositoryError::NotFound => GetPublicSingleJobError::NotFound,
                JobRepositoryError::DatabaseError(msg) => {
                    GetPublicSingleJobError::RepositoryError(msg)
                }
            })
    }
}
