use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::{
    employer_profiles, job_seeker_profiles,
};
use crate::modules::profile::application::domain::entities::{EmployerProfile, SeekerProfile};
use crate::modules::profile::application::ports::outgoing::profile_repository::{
    ProfileRepository, ProfileRepositoryError, UpsertEmployerProfileData, UpsertSeekerProfileData,
};

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn seeker_to_domain(model: job_seeker_profiles::Model) -> SeekerProfile {
    SeekerProfile {
        id: model.id,
        user_id: model.user_id,
        full_name: model.full_name,
        address: model.address,
        contact_number: model.contact_number,
        picture_url: model.picture_url,
        created_at: model.created_at.into(),
    }
}

fn employer_to_domain(model: employer_profiles::Model) -> EmployerProfile {
    EmployerProfile {
        id: model.id,
        user_id: model.user_id,
        company_name: model.company_name,
        address: model.address,
        contact_number: model.contact_number,
        picture_url: model.picture_url,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: sea_orm::DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn seeker_profile_id_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Uuid>, ProfileRepositoryError> {
        let found = job_seeker_profiles::Entity::find()
            .filter(job_seeker_profiles::Column::UserId.eq(user_id))
            .column(job_seeker_profiles::Column::Id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(|p| p.id))
    }

    async fn find_seeker_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<SeekerProfile>, ProfileRepositoryError> {
        let found = job_seeker_profiles::Entity::find()
            .filter(job_seeker_profiles::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(seeker_to_domain))
    }

    async fn upsert_seeker(
        &self,
        user_id: Uuid,
        data: UpsertSeekerProfileData,
    ) -> Result<SeekerProfile, ProfileRepositoryError> {
        let existing = job_seeker_profiles::Entity::find()
            .filter(job_seeker_profiles::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let model = match existing {
            Some(found) => {
                let mut active: job_seeker_profiles::ActiveModel = found.into();
                active.full_name = Set(data.full_name.trim().to_string());
                active.address = Set(data.address);
                active.contact_number = Set(data.contact_number);
                if data.picture_url.is_some() {
                    active.picture_url = Set(data.picture_url);
                }
                active.update(&*self.db).await.map_err(map_db_err)?
            }
            None => {
                let active = job_seeker_profiles::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    full_name: Set(data.full_name.trim().to_string()),
                    address: Set(data.address),
                    contact_number: Set(data.contact_number),
                    picture_url: Set(data.picture_url),
                    created_at: Set(Utc::now().fixed_offset()),
                };
                active.insert(&*self.db).await.map_err(map_db_err)?
            }
        };

        Ok(seeker_to_domain(model))
    }

    async fn clear_seeker_picture(&self, user_id: Uuid) -> Result<(), ProfileRepositoryError> {
        let result = job_seeker_profiles::Entity::update_many()
            .col_expr(
                job_seeker_profiles::Column::PictureUrl,
                Expr::value(Option::<String>::None),
            )
            .filter(job_seeker_profiles::Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProfileRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn find_employer_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<EmployerProfile>, ProfileRepositoryError> {
        let found = employer_profiles::Entity::find()
            .filter(employer_profiles::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(employer_to_domain))
    }

    async fn upsert_employer(
        &self,
        user_id: Uuid,
        data: UpsertEmployerProfileData,
    ) -> Result<EmployerProfile, ProfileRepositoryError> {
        let existing = employer_profiles::Entity::find()
            .filter(employer_profiles::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let model = match existing {
            Some(found) => {
                let mut active: employer_profiles::ActiveModel = found.into();
                active.company_name = Set(data.company_name.trim().to_string());
                active.address = Set(data.address);
                active.contact_number = Set(data.contact_number);
                if data.picture_url.is_some() {
                    active.picture_url = Set(data.picture_url);
                }
                active.update(&*self.db).await.map_err(map_db_err)?
            }
            None => {
                let active = employer_profiles::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    company_name: Set(data.company_name.trim().to_string()),
                    address: Set(data.address),
                    contact_number: Set(data.contact_number),
                    picture_url: Set(data.picture_url),
                    created_at: Set(Utc::now().fixed_offset()),
                };
                active.insert(&*self.db).await.map_err(map_db_err)?
            }
        };

        Ok(employer_to_domain(model))
    }

    async fn clear_employer_picture(&self, user_id: Uuid) -> Result<(), ProfileRepositoryError> {
        let result = employer_profiles::Entity::update_many()
            .col_expr(
                employer_profiles::Column::PictureUrl,
                Expr::value(Option::<String>::None),
            )
            .filter(employer_profiles::Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProfileRepositoryError::NotFound);
        }

        Ok(())
    }
}
