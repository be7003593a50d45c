use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::applications::application::domain::ApplicationStatus;
use crate::modules::applications::application::ports::outgoing::application_repository::{
    ApplicationRepository, ApplicationRepositoryError,
};
use crate::modules::email::application::services::notification_service::NotificationService;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateApplicationStatusError {
    #[error("Application not found")]
    NotFound,

    #[error("Only the owner of the parent job may change application status")]
    NotJobOwner,

    #[error("Status must be one of reviewed, shortlisted, interviewed, rejected")]
    InvalidStatus,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateApplicationStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        employer_id: Uuid,
        application_id: Uuid,
        status: &str,
    ) -> Result<ApplicationStatus, UpdateApplicationStatusError>;
}

pub struct UpdateApplicationStatusUseCase<A>
where
    A: ApplicationRepository,
{
    application_repository: A,
    notifications: NotificationService,
}

impl<A> UpdateApplicationStatusUseCase<A>
where
    A: ApplicationRepository,
{
    pub fn new(application_repository: A, notifications: NotificationService) -> Self {
        Self {
            application_repository,
            notifications,
        }
    }
}

#[async_trait]
impl<A> IUpdateApplicationStatusUseCase for UpdateApplicationStatusUseCase<A>
where
    A: ApplicationRepository + Send + Sync,
{
    async fn execute(
        &self,
        employer_id: Uuid,
        application_id: Uuid,
        status: &str,
    ) -> Result<ApplicationStatus, UpdateApplicationStatusError> {
        let status = ApplicationStatus::parse_settable(status)
            .ok_or(UpdateApplicationStatusError::InvalidStatus)?;

        let map_err = |e: ApplicationRepositoryError| match e {
            ApplicationRepositoryError::NotFound => UpdateApplicationStatusError::NotFound,
            e => UpdateApplicationStatusError::RepositoryError(e.to_string()),
        };

        let detail = self
            .application_repository
            .find_detail(application_id)
            .await
            .map_err(map_err)?
            .ok_or(UpdateApplicationStatusError::NotFound)?;

        if detail.employer_id != employer_id {
            return Err(UpdateApplicationStatusError::NotJobOwner);
        }

        self.application_repository
            .set_status(application_id, status)
            .await
            .map_err(map_err)?;

        // Already persisted; the notification must not undo that.
        self.notifications
            .application_status_changed(&detail.applicant_email, &detail.job_title, status.as_str())
            .await;

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::modules::applications::application::domain::entities::{
        Application, ApplicationDetail, JobApplicantRow, SeekerApplicationRow,
    };
    use crate::modules::applications::application::ports::outgoing::application_repository::CreateApplicationData;
    use crate::modules::email::adapter::outgoing::mock_sender::MockEmailSender;

    struct MockApplicationRepo {
        detail: Option<ApplicationDetail>,
        set: Mutex<Option<ApplicationStatus>>,
    }

    impl MockApplicationRepo {
        fn with_detail(detail: ApplicationDetail) -> Self {
            Self {
                detail: Some(detail),
                set: Mutex::new(None),
            }
        }

        fn empty() -> Self {
            Self {
                detail: None,
                set: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl ApplicationRepository for MockApplicationRepo {
        async fn create(
            &self,
            _data: CreateApplicationData,
        ) -> Result<Application, ApplicationRepositoryError> {
            unimplemented!()
        }

        async fn exists(
            &self,
            _job_id: Uuid,
            _seeker_id: Uuid,
        ) -> Result<bool, ApplicationRepositoryError> {
            unimplemented!()
        }

        async fn list_by_seeker(
            &self,
            _seeker_id: Uuid,
        ) -> Result<Vec<SeekerApplicationRow>, ApplicationRepositoryError> {
            unimplemented!()
        }

        async fn list_by_job(
            &self,
            _job_id: Uuid,
        ) -> Result<Vec<JobApplicantRow>, ApplicationRepositoryError> {
            unimplemented!()
        }

        async fn set_status(
            &self,
            _application_id: Uuid,
            status: ApplicationStatus,
        ) -> Result<(), ApplicationRepositoryError> {
            *self.set.lock().unwrap() = Some(status);
            Ok(())
        }

        async fn find_detail(
            &self,
            _application_id: Uuid,
        ) -> Result<Option<ApplicationDetail>, ApplicationRepositoryError> {
            Ok(self.detail.clone())
        }
    }

    fn detail(employer_id: Uuid) -> ApplicationDetail {
        ApplicationDetail {
            id: Uuid::new_v4(),
            job_id: Uuid::new_v4(),
            job_title: "Backend Engineer".to_string(),
            employer_id,
            applicant_email: "jane@mail.test".to_string(),
        }
    }

    #[tokio::test]
    async fn test_owner_advances_status_and_notifies() {
        let employer_id = Uuid::new_v4();
        let sender = Arc::new(MockEmailSender::new());
        let uc = UpdateApplicationStatusUseCase::new(
            MockApplicationRepo::with_detail(detail(employer_id)),
            NotificationService::new(sender.clone()),
        );

        let status = uc
            .execute(employer_id, Uuid::new_v4(), "shortlisted")
            .await
            .unwrap();

        assert_eq!(status, ApplicationStatus::Shortlisted);

        let sent = sender.get_sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "jane@mail.test");
        assert!(sent[0].2.contains("shortlisted"));
    }

    #[tokio::test]
    async fn test_pending_is_not_settable() {
        let employer_id = Uuid::new_v4();
        let uc = UpdateApplicationStatusUseCase::new(
            MockApplicationRepo::with_detail(detail(employer_id)),
            NotificationService::unconfigured(),
        );

        let err = uc
            .execute(employer_id, Uuid::new_v4(), "pending")
            .await
            .unwrap_err();

        assert!(matches!(err, UpdateApplicationStatusError::InvalidStatus));
    }

    #[tokio::test]
    async fn test_foreign_employer_is_rejected() {
        let uc = UpdateApplicationStatusUseCase::new(
            MockApplicationRepo::with_detail(detail(Uuid::new_v4())),
            NotificationService::unconfigured(),
        );

        let err = uc
            .execute(Uuid::new_v4(), Uuid::new_v4(), "reviewed")
            .await
            .unwrap_err();

        assert!(matches!(err, UpdateApplicationStatusError::NotJobOwner));
    }

    #[tokio::test]
    async fn test_missing_application_is_not_found() {
        let uc = UpdateApplicationStatusUseCase::new(
            MockApplicationRepo::empty(),
            NotificationService::unconfigured(),
        );

        let err = uc
            .execute(Uuid::new_v4(), Uuid::new_v4(), "reviewed")
            .await
            .unwrap_err();

        assert!(matches!(err, UpdateApplicationStatusError::NotFound));
    }

    #[tokio::test]
    async fn test_unconfigured_mailer_does_not_fail_transition() {
        let employer_id = Uuid::new_v4();
        let uc = UpdateApplicationStatusUseCase::new(
            MockApplicationRepo::with_detail(detail(employer_id)),
            NotificationService::unconfigured(),
        );

        let status = uc
            .execute(employer_id, Uuid::new_v4(), "rejected")
            .await
            .unwrap();

        assert_eq!(status, ApplicationStatus::Rejected);
    }
}
