use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::applications::application::domain::entities::Application;
use crate::modules::applications::application::ports::outgoing::application_repository::{
    ApplicationRepository, ApplicationRepositoryError, CreateApplicationData,
};
use crate::modules::job::application::domain::JobStatus;
use crate::modules::job::application::ports::outgoing::job_repository::JobRepository;
use crate::modules::profile::application::ports::outgoing::profile_repository::ProfileRepository;
use crate::modules::storage::application::domain::download_url::attachment_url;
use crate::modules::storage::application::ports::outgoing::asset_store::AssetStore;

pub const RESUME_NAMESPACE: &str = "resumes";

/// Where the client should send the user when the profile gate fires.
pub const PROFILE_REDIRECT_HINT: &str = "/profile/seeker";

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApplyToJobError {
    /// Missing job and non-approved job both land here; the public answer
    /// must not reveal that an unapproved posting exists.
    #[error("Job not found")]
    JobNotFound,

    #[error("A job seeker profile is required before applying")]
    ProfileRequired,

    #[error("You have already applied to this job")]
    DuplicateApplication,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct ApplyToJobInput {
    pub cover_letter: Option<String>,
    /// Uploaded resume file; wins over `resume_url` when both are present.
    pub resume_file: Option<ResumeUpload>,
    /// Caller-supplied URL, stored as-is.
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmittedApplication {
    #[serde(flatten)]
    pub application: Application,
    /// Forced-download variant of `resume_url`.
    pub download_url: Option<String>,
}

#[async_trait]
pub trait IApplyToJobUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        job_id: Uuid,
        input: ApplyToJobInput,
    ) -> Result<SubmittedApplication, ApplyToJobError>;
}

pub struct ApplyToJobUseCase<A, J>
where
    A: ApplicationRepository,
    J: JobRepository,
{
    application_repository: A,
    job_repository: J,
    profile_repository: Arc<dyn ProfileRepository + Send + Sync>,
    asset_store: Arc<dyn AssetStore + Send + Sync>,
}

impl<A, J> ApplyToJobUseCase<A, J>
where
    A: ApplicationRepository,
    J: JobRepository,
{
    pub fn new(
        application_repository: A,
        job_repository: J,
        profile_repository: Arc<dyn ProfileRepository + Send + Sync>,
        asset_store: Arc<dyn AssetStore + Send + Sync>,
    ) -> Self {
        Self {
            application_repository,
            job_repository,
            profile_repository,
            asset_store,
        }
    }
}

#[async_trait]
impl<A, J> IApplyToJobUseCase for ApplyToJobUseCase<A, J>
where
    A: ApplicationRepository + Send + Sync,
    J: JobRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        job_id: Uuid,
        input: ApplyToJobInput,
    ) -> Result<SubmittedApplication, ApplyToJobError> {
        let seeker_id = self
            .profile_repository
            .seeker_profile_id_by_user(user_id)
            .await
            .map_err(|e| ApplyToJobError::RepositoryError(e.to_string()))?
            .ok_or(ApplyToJobError::ProfileRequired)?;

        let job = self
            .job_repository
            .find_by_id(job_id)
            .await
            .map_err(|e| ApplyToJobError::RepositoryError(e.to_string()))?
            .ok_or(ApplyToJobError::JobNotFound)?;

        if job.status != JobStatus::Approved {
            return Err(ApplyToJobError::JobNotFound);
        }

        // Pre-check is an optimization; the unique index still decides races.
        let already_applied = self
            .application_repository
            .exists(job_id, seeker_id)
            .await
            .map_err(|e| ApplyToJobError::RepositoryError(e.to_string()))?;

        if already_applied {
            return Err(ApplyToJobError::DuplicateApplication);
        }

        // Resume storage is best-effort: an application without its file is
        // still worth keeping, the seeker can follow up with the employer.
        let resume_url = match &input.resume_file {
            Some(file) => match self
                .asset_store
                .upload(RESUME_NAMESPACE, &file.filename, file.bytes.clone())
                .await
            {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!("resume upload failed, submitting application without it: {}", e);
                    None
                }
            },
            None => input.resume_url.clone(),
        };

        let application = self
            .application_repository
            .create(CreateApplicationData {
                job_id,
                seeker_id,
                cover_letter: input.cover_letter,
                resume_url,
            })
            .await
            .map_err(|e| match e {
                ApplicationRepositoryError::Duplicate => ApplyToJobError::DuplicateApplication,
                ApplicationRepositoryError::NotFound => {
                    ApplyToJobError::RepositoryError(e.to_string())
                }
                ApplicationRepositoryError::DatabaseError(msg) => {
                    ApplyToJobError::RepositoryError(msg)
                }
            })?;

        let download_url = application
            .resume_url
            .as_deref()
            .map(|url| attachment_url(url, None));

        Ok(SubmittedApplication {
            application,
            download_url,
        })
    }
}
