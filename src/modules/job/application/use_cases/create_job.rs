use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::job::application::domain::Job;
use crate::modules::job::application::ports::outgoing::job_repository::{
    JobFields, JobRepository, JobRepositoryError,
};
use crate::modules::storage::application::ports::outgoing::asset_store::AssetStore;

pub const LOGO_NAMESPACE: &str = "logos";

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateJobError {
    #[error("Field '{0}' must not be empty")]
    MissingField(&'static str),

    #[error("salary_min must not exceed salary_max")]
    InvalidSalaryRange,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct LogoUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateJobInput {
    pub title: String,
    pub description: String,
    pub location: String,
    pub work_type: String,
    pub job_type: String,
    pub experience_level: String,
    pub industry: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub logo: Option<LogoUpload>,
}

pub(crate) fn validate_fields(input: &CreateJobInput) -> Result<(), CreateJobError> {
    for (name, value) in [
        ("title", &input.title),
        ("description", &input.description),
        ("location", &input.location),
        ("work_type", &input.work_type),
        ("job_type", &input.job_type),
        ("experience_level", &input.experience_level),
        ("industry", &input.industry),
    ] {
        if value.trim().is_empty() {
            return Err(CreateJobError::MissingField(name));
        }
    }

    if let (Some(min), Some(max)) = (input.salary_min, input.salary_max) {
        if min > max {
            return Err(CreateJobError::InvalidSalaryRange);
        }
    }

    Ok(())
}

#[async_trait]
pub trait ICreateJobUseCase: Send + Sync {
    async fn execute(
        &self,
        employer_id: Uuid,
        input: CreateJobInput,
    ) -> Result<Job, CreateJobError>;
}

pub struct CreateJobUseCase<R>
where
    R: JobRepository,
{
    job_repository: R,
    asset_store: Arc<dyn AssetStore + Send + Sync>,
}

impl<R> CreateJobUseCase<R>
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
impl<R> ICreateJobUseCase for CreateJobUseCase<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(
        &self,
        employer_id: Uuid,
        input: CreateJobInput,
    ) -> Result<Job, CreateJobError> {
        validate_fields(&input)?;

        // Logo storage is best-effort. A posting without its logo is still a
        // valid posting; the employer can re-upload on edit.
        let company_logo = match &input.logo {
            Some(logo) => match self
                .asset_store
                .upload(LOGO_NAMESPACE, &logo.filename, logo.bytes.clone())
                .await
            {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!("logo upload failed, creating posting without it: {}", e);
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
            .create(employer_id, fields)
            .await
            .map_err(|e| match e {
                JobRepositoryError::NotFound => CreateJobError::RepositoryError(e.to_string()),
                JobRepositoryError::DatabaseError(msg) => CreateJobError::RepositoryError(msg),
            })
    }
}
