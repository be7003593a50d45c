use async_trait::async_trait;
use serde::Serialize;

use crate::modules::job::application::domain::Job;
use crate::modules::job::application::ports::outgoing::job_repository::{
    JobRepository, JobRepositoryError,
};

pub const DEFAULT_PER_PAGE: u64 = 20;
pub const MAX_PER_PAGE: u64 = 100;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPublicJobsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicJobsPage {
    pub jobs: Vec<Job>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

#[async_trait]
pub trait IGetPublicJobsUseCase: Send + Sync {
    async fn execute(
        &self,
        page: Option<u64>,
        per_page: Option<u64>,
    ) -> Result<PublicJobsPage, GetPublicJobsError>;
}

pub struct GetPublicJobsUseCase<R>
where
    R: JobRepository,
{
    job_repository: R,
}

impl<R> GetPublicJobsUseCase<R>
where
    R: JobRepository,
{
    pub fn new(job_repository: R) -> Self {
        Self { job_repository }
    }
}

#[async_trait]
impl<R> IGetPublicJobsUseCase for GetPublicJobsUseCase<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(
        &self,
        page: Option<u64>,
        per_page: Option<u64>,
    ) -> Result<PublicJobsPage, GetPublicJobsError> {
        let page = page.unwrap_or(1).max(1);
        let per_page = per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);

        let (jobs, total) = self
            .job_repository
            .list_approved(page, per_page)
            .await
            .map_err(|e| match e {
                JobRepositoryError::NotFound => GetPublicJobsError::RepositoryError(e.to_string()),
                JobRepositoryError::DatabaseError(msg) => {
                    GetPublicJobsError::RepositoryError(msg)
                }
            })?;

        Ok(PublicJobsPage {
            jobs,
            page,
            per_page,
            total,
            total_pages: total.div_ceil(per_page),
        })
    }
}
