use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::SeekerProfile;
use crate::modules::profile::application::ports::outgoing::profile_repository::{
    ProfileRepository, ProfileRepositoryError, UpsertSeekerProfileData,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeekerProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Full name must not be empty")]
    MissingFullName,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

fn map_repo_error(e: ProfileRepositoryError) -> SeekerProfileError {
    match e {
        ProfileRepositoryError::NotFound => SeekerProfileError::NotFound,
        ProfileRepositoryError::DatabaseError(msg) => SeekerProfileError::RepositoryError(msg),
    }
}

#[async_trait]
pub trait ISeekerProfileUseCase: Send + Sync {
    async fn fetch(&self, user_id: Uuid) -> Result<SeekerProfile, SeekerProfileError>;

    async fn upsert(
        &self,
        user_id: Uuid,
        data: UpsertSeekerProfileData,
    ) -> Result<SeekerProfile, SeekerProfileError>;

    async fn delete_picture(&self, user_id: Uuid) -> Result<(), SeekerProfileError>;
}

pub struct SeekerProfileUseCase<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> SeekerProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<R> ISeekerProfileUseCase for SeekerProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn fetch(&self, user_id: Uuid) -> Result<SeekerProfile, SeekerProfileError> {
        self.profile_repository
            .find_seeker_by_user(user_id)
            .await
            .map_err(map_repo_error)?
            .ok_or(SeekerProfileError::NotFound)
    }

    async fn upsert(
        &self,
        user_id: Uuid,
        data: UpsertSeekerProfileData,
    ) -> Result<SeekerProfile, SeekerProfileError> {
        if data.full_name.trim().is_empty() {
            return Err(SeekerProfileError::MissingFullName);
        }

        self.profile_repository
            .upsert_seeker(user_id, data)
            .await
            .map_err(map_repo_error)
    }

    async fn delete_picture(&self, user_id: Uuid) -> Result<(), SeekerProfileError> {
        self.profile_repository
            .clear_seeker_picture(user_id)
            .await
            .map_err(map_repo_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::modules::profile::application::domain::entities::EmployerProfile;
    use crate::modules::profile::application::ports::outgoing::profile_repository::UpsertEmployerProfileData;

    struct MockProfileRepo {
        seeker: Option<SeekerProfile>,
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepo {
        async fn seeker_profile_id_by_user(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<Uuid>, ProfileRepositoryError> {
            Ok(self.seeker.as_ref().map(|p| p.id))
        }

        async fn find_seeker_by_user(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<SeekerProfile>, ProfileRepositoryError> {
            Ok(self.seeker.clone())
        }

        async fn upsert_seeker(
            &self,
            user_id: Uuid,
            data: UpsertSeekerProfileData,
        ) -> Result<SeekerProfile, ProfileRepositoryError> {
            Ok(SeekerProfile {
                id: Uuid::new_v4(),
                user_id,
                full_name: data.full_name,
                address: data.address,
                contact_number: data.contact_number,
                picture_url: data.picture_url,
                created_at: Utc::now(),
            })
        }

        async fn clear_seeker_picture(
            &self,
            _user_id: Uuid,
        ) -> Result<(), ProfileRepositoryError> {
            if self.seeker.is_some() {
                Ok(())
            } else {
                Err(ProfileRepositoryError::NotFound)
            }
        }

        async fn find_employer_by_user(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<EmployerProfile>, ProfileRepositoryError> {
            unimplemented!("not needed for seeker tests")
        }

        async fn upsert_employer(
            &self,
            _user_id: Uuid,
            _data: UpsertEmployerProfileData,
        ) -> Result<EmployerProfile, ProfileRepositoryError> {
            unimplemented!("not needed for seeker tests")
        }

        async fn clear_employer_picture(
            &self,
            _user_id: Uuid,
        ) -> Result<(), ProfileRepositoryError> {
            unimplemented!("not needed for seeker tests")
        }
    }

    fn sample_profile(user_id: Uuid) -> SeekerProfile {
        SeekerProfile {
            id: Uuid::new_v4(),
            user_id,
            full_name: "Jane Doe".to_string(),
            address: None,
            contact_number: None,
            picture_url: Some("https://assets.test/upload/pics/jane.png".to_string()),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_fetch_missing_profile_is_not_found() {
        let use_case = SeekerProfileUseCase::new(MockProfileRepo { seeker: None });

        let err = use_case.fetch(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, SeekerProfileError::NotFound));
    }

    #[tokio::test]
    async fn test_upsert_rejects_blank_name() {
        let use_case = SeekerProfileUseCase::new(MockProfileRepo { seeker: None });

        let err = use_case
            .upsert(
                Uuid::new_v4(),
                UpsertSeekerProfileData {
                    full_name: "   ".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, SeekerProfileError::MissingFullName));
    }

    #[tokio::test]
    async fn test_upsert_success() {
        let use_case = SeekerProfileUseCase::new(MockProfileRepo { seeker: None });
        let user_id = Uuid::new_v4();

        let profile = use_case
            .upsert(
                user_id,
                UpsertSeekerProfileData {
                    full_name: "Jane Doe".to_string(),
                    address: Some("12 High St".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(profile.user_id, user_id);
        assert_eq!(profile.full_name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_delete_picture_without_profile_is_not_found() {
        let use_case = SeekerProfileUseCase::new(MockProfileRepo { seeker: None });

        let err = use_case.delete_picture(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, SeekerProfileError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_picture_success() {
        let user_id = Uuid::new_v4();
        let use_case = SeekerProfileUseCase::new(MockProfileRepo {
            seeker: Some(sample_profile(user_id)),
        });

        assert!(use_case.delete_picture(user_id).await.is_ok());
    }
}
