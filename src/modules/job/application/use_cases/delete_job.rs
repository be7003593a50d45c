use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::job::application::ports::outgoing::job_repository::{
    JobRepository, JobRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteJobError {
    /// Covers both a missing job and a job owned by another employer; the
    /// scoped delete cannot tell them apart and the response must not leak
    /// which it was.
    #[error("Job not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteJobUseCase: Send + Sync {
    async fn execute(&self, job_id: Uuid, employer_id: Uuid) -> Result<(), DeleteJobError>;
}

pub struct DeleteJobUseCase<R>
where
    R: JobRepository,
{
    job_repository: R,
}

impl<R> DeleteJobUseCase<R>
where
    R: JobRepository,
{
    pub fn new(job_repository: R) -> Self {
        Self { job_repository }
    }
}

#[async_trait]
impl<R> IDeleteJobUseCase for DeleteJobUseCase<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(&self, job_id: Uuid, employer_id: Uuid) -> Result<(), DeleteJobError> {
        self.job_repository
            .delete(job_id, employer_id)
            .await
            .map_err(|e| match e {
                JobRepositoryError::NotFound => DeleteJobError::NotFound,
                JobRepositoryError::DatabaseError(msg) => DeleteJobError::RepositoryError(msg),
            })
    }
}
