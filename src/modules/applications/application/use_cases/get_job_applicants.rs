use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::applications::application::domain::entities::JobApplicantRow;
use crate::modules::applications::application::ports::outgoing::application_repository::ApplicationRepository;
use crate::modules::job::application::ports::outgoing::job_repository::{
    JobRepository, JobRepositoryError,
};
use crate::modules::storage::application::domain::download_url::attachment_url;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetJobApplicantsError {
    #[error("Job not found")]
    JobNotFound,

    #[error("Only the job owner may list applicants")]
    NotJobOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicantRow {
    #[serde(flatten)]
    pub applicant: JobApplicantRow,
    pub download_url: Option<String>,
}

#[async_trait]
pub trait IGetJobApplicantsUseCase: Send + Sync {
    async fn execute(
        &self,
        employer_id: Uuid,
        job_id: Uuid,
    ) -> Result<Vec<ApplicantRow>, GetJobApplicantsError>;
}

pub struct GetJobApplicantsUseCase<A, J>
where
    A: ApplicationRepository,
    J: JobRepository,
{
    application_repository: A,
    job_repository: J,
}

impl<A, J> GetJobApplicantsUseCase<A, J>
where
    A: ApplicationRepository,
    J: JobRepository,
{
    pub fn new(application_repository: A, job_repository: J) -> Self {
        Self {
            application_repository,
            job_repository,
        }
    }
}

#[async_trait]
impl<A, J> IGetJobApplicantsUseCase for GetJobApplicantsUseCase<A, J>
where
    A: ApplicationRepository + Send + Sync,
    J: JobRepository + Send + Sync,
{
    async fn execute(
        &self,
        employer_id: Uuid,
        job_id: Uuid,
    ) -> Result<Vec<ApplicantRow>, GetJobApplicantsError> {
        let job = self
            .job_repository
            .find_by_id(job_id)
            .await
            .map_err(|e| match e {
                JobRepositoryError::NotFound => GetJobApplicantsError::JobNotFound,
                JobRepositoryError::DatabaseError(msg) => {
                    GetJobApplicantsError::RepositoryError(msg)
                }
            })?
            .ok_or(GetJobApplicantsError::JobNotFound)?;

        if job.employer_id != employer_id {
            return Err(GetJobApplicantsError::NotJobOwner);
        }

        let rows = self
            .application_repository
            .list_by_job(job_id)
            .await
            .map_err(|e| GetJobApplicantsError::RepositoryError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let download_url = row
                    .resume_url
                    .as_deref()
                    .map(|url| attachment_url(url, None));
                ApplicantRow {
                    applicant: row,
                    download_url,
                }
            })
            .collect())
    }
}
