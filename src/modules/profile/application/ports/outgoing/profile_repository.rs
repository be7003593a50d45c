use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{EmployerProfile, SeekerProfile};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Statically enumerated partial update; only provided fields are bound.
/// Column names never come from the caller.
#[derive(Debug, Clone, Default)]
pub struct UpsertSeekerProfileData {
    pub full_name: String,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub picture_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpsertEmployerProfileData {
    pub company_name: String,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub picture_url: Option<String>,
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Resolves the seeker profile id for a user, the gate the apply
    /// workflow checks before anything else.
    async fn seeker_profile_id_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Uuid>, ProfileRepositoryError>;

    async fn find_seeker_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<SeekerProfile>, ProfileRepositoryError>;

    async fn upsert_seeker(
        &self,
        user_id: Uuid,
        data: UpsertSeekerProfileData,
    ) -> Result<SeekerProfile, ProfileRepositoryError>;

    async fn clear_seeker_picture(&self, user_id: Uuid) -> Result<(), ProfileRepositoryError>;

    async fn find_employer_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<EmployerProfile>, ProfileRepositoryError>;

    async fn upsert_employer(
        &self,
        user_id: Uuid,
        data: UpsertEmployerProfileData,
    ) -> Result<EmployerProfile, ProfileRepositoryError>;

    async fn clear_employer_picture(&self, user_id: Uuid) -> Result<(), ProfileRepositoryError>;
}
