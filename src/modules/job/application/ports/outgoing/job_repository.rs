use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::job::application::domain::{Job, JobStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum JobRepositoryError {
    #[error("Job not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Statically enumerated column set for create and update. Callers never
/// control column names, only these typed fields.
#[derive(Debug, Clone, Default)]
pub struct JobFields {
    pub title: String,
    pub description: String,
    pub location: String,
    pub work_type: String,
    pub job_type: String,
    pub experience_level: String,
    pub industry: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub company_logo: Option<String>,
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Inserts a new posting. Status is forced to `pending` regardless of
    /// caller input.
    async fn create(
        &self,
        employer_id: Uuid,
        fields: JobFields,
    ) -> Result<Job, JobRepositoryError>;

    /// Approved postings only, newest first, with the total approved count
    /// for pagination metadata.
    async fn list_approved(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Job>, u64), JobRepositoryError>;

    /// A single posting, NotFound for any non-approved status.
    async fn get_approved(&self, job_id: Uuid) -> Result<Job, JobRepositoryError>;

    /// Every posting of one employer, any status, newest first.
    async fn list_by_employer(&self, employer_id: Uuid) -> Result<Vec<Job>, JobRepositoryError>;

    /// Scoped by (job_id, employer_id). Resets status to `pending` and
    /// clears the rejection reason. Zero affected rows collapse to NotFound
    /// whether the job is missing or owned by someone else.
    async fn update(
        &self,
        job_id: Uuid,
        employer_id: Uuid,
        fields: JobFields,
    ) -> Result<Job, JobRepositoryError>;

    /// Owner-scoped delete; zero affected rows collapse to NotFound.
    async fn delete(&self, job_id: Uuid, employer_id: Uuid) -> Result<(), JobRepositoryError>;

    /// Moderation delete, deliberately not scoped by employer.
    async fn delete_any(&self, job_id: Uuid) -> Result<(), JobRepositoryError>;

    /// Moderation status write, unscoped.
    async fn set_status(
        &self,
        job_id: Uuid,
        status: JobStatus,
        rejection_reason: Option<String>,
    ) -> Result<Job, JobRepositoryError>;

    /// Internal lookup regardless of status, used by moderation and the
    /// application workflow.
    async fn find_by_id(&self, job_id: Uuid) -> Result<Option<Job>, JobRepositoryError>;
}
