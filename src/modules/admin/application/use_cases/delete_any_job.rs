use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::job::application::ports::outgoing::job_repository::{
    JobRepository, JobRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAnyJobError {
    #[error("Job not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteAnyJobUseCase: Send + Sync {
    async fn execute(&self, job_id: Uuid) -> Result<(), DeleteAnyJobError>;
}

pub struct DeleteAnyJobUseCase<R>
where
    R: JobRepository,
{
    job_repository: R,
}

impl<R> DeleteAnyJobUseCase<R>
where
    R: JobRepository,
{
    pub fn new(job_repository: R) -> Self {
        Self { job_repository }
    }
}

#[async_trait]
impl<R> IDeleteAnyJobUseCase for DeleteAnyJobUseCase<R>
where
    R: JobRepository + Send + Sync,
{
    /// Moderation delete, scoped by job id alone rather than by the caller's
    /// own employer id.
    async fn execute(&self, job_id: Uuid) -> Result<(), DeleteAnyJobError> {
        self.job_repository
            .delete_any(job_id)
            .await
            .map_err(|e| match e {
                JobRepositoryError::NotFound => DeleteAnyJobError::NotFound,
                JobRepositoryError::DatabaseError(msg) => DeleteAnyJobError::RepositoryError(msg),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::job::application::domain::{Job, JobStatus};
    use crate::modules::job::application::ports::outgoing::job_repository::JobFields;

    struct MockJobRepo {
        known_id: Option<Uuid>,
    }

    #[async_trait]
    impl JobRepository for MockJobRepo {
        async fn create(
            &self,
            _employer_id: Uuid,
            _fields: JobFields,
        ) -> Result<Job, JobRepositoryError> {
            unimplemented!()
        }

        async fn list_approved(
            &self,
            _page: u64,
            _per_page: u64,
        ) -> Result<(Vec<Job>, u64), JobRepositoryError> {
            unimplemented!()
        }

        async fn get_approved(&self, _job_id: Uuid) -> Result<Job, JobRepositoryError> {
            unimplemented!()
        }

        async fn list_by_employer(
            &self,
            _employer_id: Uuid,
        ) -> Result<Vec<Job>, JobRepositoryError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _job_id: Uuid,
            _employer_id: Uuid,
            _fields: JobFields,
        ) -> Result<Job, JobRepositoryError> {
            unimplemented!()
        }

        async fn delete(
            &self,
            _job_id: Uuid,
            _employer_id: Uuid,
        ) -> Result<(), JobRepositoryError> {
            unimplemented!()
        }

        async fn delete_any(&self, job_id: Uuid) -> Result<(), JobRepositoryError> {
            if self.known_id == Some(job_id) {
                Ok(())
            } else {
                Err(JobRepositoryError::NotFound)
            }
        }

        async fn set_status(
            &self,
            _job_id: Uuid,
            _status: JobStatus,
            _rejection_reason: Option<String>,
        ) -> Result<Job, JobRepositoryError> {
            unimplemented!()
        }

        async fn find_by_id(&self, _job_id: Uuid) -> Result<Option<Job>, JobRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_known_job_is_deleted() {
        let id = Uuid::new_v4();
        let uc = DeleteAnyJobUseCase::new(MockJobRepo { known_id: Some(id) });

        uc.execute(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_job_is_not_found() {
        let uc = DeleteAnyJobUseCase::new(MockJobRepo { known_id: None });

        let err = uc.execute(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DeleteAnyJobError::NotFound));
    }
}
