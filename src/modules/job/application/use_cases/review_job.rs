use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::user_query::UserQuery;
use crate::modules::email::application::services::notification_service::NotificationService;
use crate::modules::job::application::domain::{Job, JobStatus};
use crate::modules::job::application::ports::outgoing::job_repository::{
    JobRepository, JobRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewJobError {
    #[error("Job not found")]
    NotFound,

    #[error("Decision must be 'approved' or 'rejected'")]
    InvalidDecision,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IReviewJobUseCase: Send + Sync {
    async fn execute(
        &self,
        job_id: Uuid,
        decision: &str,
        reason: Option<String>,
    ) -> Result<Job, ReviewJobError>;
}

/// Moderation decision. A rejected posting may later be approved again,
/// either directly by an admin re-decision or after the employer edits it
/// back into pending.
pub struct ReviewJobUseCase<R>
where
    R: JobRepository,
{
    job_repository: R,
    user_query: Arc<dyn UserQuery + Send + Sync>,
    notifications: NotificationService,
}

impl<R> ReviewJobUseCase<R>
where
    R: JobRepository,
{
    pub fn new(
        job_repository: R,
        user_query: Arc<dyn UserQuery + Send + Sync>,
        notifications: NotificationService,
    ) -> Self {
        Self {
            job_repository,
            user_query,
            notifications,
        }
    }
}

#[async_trait]
impl<R> IReviewJobUseCase for ReviewJobUseCase<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(
        &self,
        job_id: Uuid,
        decision: &str,
        reason: Option<String>,
    ) -> Result<Job, ReviewJobError> {
        let status = match JobStatus::parse(decision) {
            Some(s @ (JobStatus::Approved | JobStatus::Rejected)) => s,
            _ => return Err(ReviewJobError::InvalidDecision),
        };

        let map_err = |e: JobRepositoryError| match e {
            JobRepositoryError::NotFound => ReviewJobError::NotFound,
            JobRepositoryError::DatabaseError(msg) => ReviewJobError::RepositoryError(msg),
        };

        let job = self
            .job_repository
            .find_by_id(job_id)
            .await
            .map_err(map_err)?
            .ok_or(ReviewJobError::NotFound)?;

        let reason = match status {
            JobStatus::Rejected => reason,
            _ => None,
        };

        let updated = self
            .job_repository
            .set_status(job_id, status, reason.clone())
            .await
            .map_err(map_err)?;

        // Notification is best-effort; the decision above is already
        // committed.
        match self.user_query.email_by_user_id(job.employer_id).await {
            Ok(email) => {
                self.notifications
                    .job_reviewed(&email, &updated.title, status, reason.as_deref())
                    .await;
            }
            Err(e) => {
                warn!(
                    "could not resolve employer email for job review notification: {}",
                    e
                );
            }
        }

        Ok(updated)
    }
}
