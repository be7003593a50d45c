use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::job::application::domain::Job;
use crate::modules::job::application::ports::outgoing::job_repository::{
    JobFields, JobRepository, JobRepositoryError,
};
use crate::modules::job::application::use_cases::create_job::{
    validate_fields, CreateJobError, CreateJobInput, LOGO_NAMESPACE,
};
use crate::modules::storage::application::ports::outgoing::asset_store::AssetStore;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateJobError {
    /// Missing job and foreign-owned job collapse into one answer.
    #[error("Job not found")]
    NotFound,

    #[error("Field '{0}' must not be empty")]
    MissingField(&'static str),

    #[error("salary_min must not exceed salary_max")]
    InvalidSalaryRange,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateJobUseCase: Send + Sync {
    /// Every successful edit sends the posting back through moderation:
    /// status resets to pending and any rejection reason is cleared.
    async fn execute(
        &self,
        job_id: Uuid,
        employer_id: Uuid,
        input: CreateJobInput,
    ) -> Result<Job, UpdateJobError>;
}

pub struct UpdateJobUseCase<R>
where
    R: JobRepository,
{
    job_repository: R,
    asset_store: Arc<dyn AssetStore + Send + Sync>,
}

impl<R> UpdateJobUseCase<R>
where
    R: JobRepository,
{
    pub fn new(job_repository: R, asset_store: Arc<dyn AssetStore + Send + Sync>) -> Self {
        Self {
            job_repository,
            asset_store,
        }
    }
}

#[async_trait]
impl<R> IUpdateJobUseCase for UpdateJobUseCase<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(
        &self,
        job_id: Uuid,
        employer_id: Uuid,
        input: CreateJobInput,
    ) -> Result<Job, UpdateJobError> {
        validate_fields(&input).map_err(|e| match e {
            CreateJobError::MissingField(name) => UpdateJobError::MissingField(name),
            CreateJobError::InvalidSalaryRange => UpdateJobError::InvalidSalaryRange,
            CreateJobError::RepositoryError(msg) => UpdateJobError::RepositoryError(msg),
        })?;

        // None keeps whatever logo the posting already has.
        let company_logo = match &input.logo {
            Some(logo) => match self
                .asset_store
                .upload(LOGO_NAMESPACE, &logo.filename, logo.bytes.clone())
                .await
            {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!("logo upload failed, keeping the existing logo: {}", e);
                    None
                }
            },
            None => None,
        };

        let fields = JobFields {
            title: input.title,
            description: input.description,
            location: input.location,
            work_type: input.work_type,
            job_type: input.job_type,
            experience_level: input.experience_level,
            industry: input.industry,
            salary_min: input.salary_min,
            salary_max: input.salary_max,
            company_logo,
        };

        self.job_repository
            .update(job_id, employer_id, fields)
            .await
            .map_err(|e| match e {
                JobRepositoryError::NotFound => UpdateJobError::NotFound,
                JobRepositoryError::DatabaseError(msg) => UpdateJobError::RepositoryError(msg),
            })
    }
}
