use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::applications::application::domain::entities::{
    Application, ApplicationDetail, JobApplicantRow, SeekerApplicationRow,
};
use crate::modules::applications::application::domain::ApplicationStatus;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApplicationRepositoryError {
    /// The storage-level unique index on (job_id, seeker_id) fired. This is
    /// the authoritative duplicate guard; the workflow pre-check only exists
    /// to answer the common case without an insert attempt.
    #[error("Application already exists for this job and seeker")]
    Duplicate,

    #[error("Application not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct CreateApplicationData {
    pub job_id: Uuid,
    pub seeker_id: Uuid,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
}

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Inserts with status `pending`. A unique-index violation on
    /// (job_id, seeker_id) is translated to `Duplicate`.
    async fn create(
        &self,
        data: CreateApplicationData,
    ) -> Result<Application, ApplicationRepositoryError>;

    async fn exists(
        &self,
        job_id: Uuid,
        seeker_id: Uuid,
    ) -> Result<bool, ApplicationRepositoryError>;

    /// A seeker's applications, newest first, joined with job fields.
    async fn list_by_seeker(
        &self,
        seeker_id: Uuid,
    ) -> Result<Vec<SeekerApplicationRow>, ApplicationRepositoryError>;

    /// All applicants for one job, newest first, joined through the seeker
    /// profile to the account.
    async fn list_by_job(
        &self,
        job_id: Uuid,
    ) -> Result<Vec<JobApplicantRow>, ApplicationRepositoryError>;

    async fn set_status(
        &self,
        application_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<(), ApplicationRepositoryError>;

    /// Ownership and notification projection for one application.
    async fn find_detail(
        &self,
        application_id: Uuid,
    ) -> Result<Option<ApplicationDetail>, ApplicationRepositoryError>;
}
