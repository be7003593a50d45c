use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::job::application::domain::Job;
use crate::modules::job::application::ports::outgoing::job_repository::{
    JobRepository, JobRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMyJobsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Employer dashboard listing. Unlike the public listing this returns every
/// status, including rejected postings with their reason.
#[async_trait]
pub trait IGetMyJobsUseCase: Send + Sync {
    async fn execute(&self, employer_id: Uuid) -> Result<Vec<Job>, GetMyJobsError>;
}

pub struct GetMyJobsUseCase<R>
where
    R: JobRepository,
{
    job_repository: R,
}

impl<R> GetMyJobsUseCase<R>
where
    R: JobRepository,
{
    pub fn new(job_repository: R) -> Self {
        Self { job_repository }
    }
}

#[async_trait]
impl<R> IGetMyJobsUseCase for GetMyJobsUseCase<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(&self, employer_id: Uuid) -> Result<Vec<Job>, GetMyJobsError> {
        self.job_repository
            .list_by_employer(employer_id)
            .await
            .map_err(|e| match e {
                JobRepositoryError::NotFound => GetMyJobsError::RepositoryError(e.to_string()),
                JobRepositoryError::DatabaseError(msg) => GetMyJobsError::RepositoryError(msg),
            })
    }
}
