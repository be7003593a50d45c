use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::applications::adapter::outgoing::sea_orm_entity::applications::{
    self, ActiveModel, Column, Entity, Relation,
};
use crate::modules::applications::application::domain::entities::{
    Application, ApplicationDetail, JobApplicantRow, SeekerApplicationRow,
};
use crate::modules::applications::application::domain::ApplicationStatus;
use crate::modules::applications::application::ports::outgoing::application_repository::{
    ApplicationRepository, ApplicationRepositoryError, CreateApplicationData,
};
use crate::modules::job::adapter::outgoing::sea_orm_entity::jobs;
use crate::modules::profile::adapter::outgoing::sea_orm_entity::job_seeker_profiles;

#[derive(Clone)]
pub struct ApplicationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ApplicationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn parse_status(raw: &str) -> Result<ApplicationStatus, ApplicationRepositoryError> {
    ApplicationStatus::parse(raw).ok_or_else(|| {
        ApplicationRepositoryError::DatabaseError(format!(
            "unknown status in applications row: {}",
            raw
        ))
    })
}

fn model_to_application(
    model: applications::Model,
) -> Result<Application, ApplicationRepositoryError> {
    Ok(Application {
        id: model.id,
        job_id: model.job_id,
        seeker_id: model.seeker_id,
        cover_letter: model.cover_letter,
        resume_url: model.resume_url,
        status: parse_status(&model.status)?,
        applied_at: model.applied_at.into(),
    })
}

fn map_insert_error(e: DbErr) -> ApplicationRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        ApplicationRepositoryError::Duplicate
    } else {
        ApplicationRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ApplicationRepositoryError {
    ApplicationRepositoryError::DatabaseError(e.to_string())
}

#[derive(Debug, FromQueryResult)]
struct SeekerQueryRow {
    id: Uuid,
    job_id: Uuid,
    job_title: String,
    job_location: String,
    company_logo: Option<String>,
    cover_letter: Option<String>,
    resume_url: Option<String>,
    status: String,
    applied_at: sea_orm::prelude::DateTimeWithTimeZone,
}

#[derive(Debug, FromQueryResult)]
struct ApplicantQueryRow {
    id: Uuid,
    seeker_id: Uuid,
    full_name: String,
    email: String,
    contact_number: Option<String>,
    cover_letter: Option<String>,
    resume_url: Option<String>,
    status: String,
    applied_at: sea_orm::prelude::DateTimeWithTimeZone,
}

#[derive(Debug, FromQueryResult)]
struct DetailQueryRow {
    id: Uuid,
    job_id: Uuid,
    job_title: String,
    employer_id: Uuid,
    applicant_email: String,
}

#[async_trait]
impl ApplicationRepository for ApplicationRepositoryPostgres {
    async fn create(
        &self,
        data: CreateApplicationData,
    ) -> Result<Application, ApplicationRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            job_id: Set(data.job_id),
            seeker_id: Set(data.seeker_id),
            cover_letter: Set(data.cover_letter),
            resume_url: Set(data.resume_url),
            status: Set(ApplicationStatus::Pending.as_str().to_string()),
            applied_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_insert_error)?;

        model_to_application(result)
    }

    async fn exists(
        &self,
        job_id: Uuid,
        seeker_id: Uuid,
    ) -> Result<bool, ApplicationRepositoryError> {
        let count = Entity::find()
            .filter(Column::JobId.eq(job_id))
            .filter(Column::SeekerId.eq(seeker_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn list_by_seeker(
        &self,
        seeker_id: Uuid,
    ) -> Result<Vec<SeekerApplicationRow>, ApplicationRepositoryError> {
        let rows = Entity::find()
            .select_only()
            .columns([
                Column::Id,
                Column::JobId,
                Column::CoverLetter,
                Column::ResumeUrl,
                Column::Status,
                Column::AppliedAt,
            ])
            .column_as(jobs::Column::Title, "job_title")
            .column_as(jobs::Column::Location, "job_location")
            .column_as(jobs::Column::CompanyLogo, "company_logo")
            .join(JoinType::InnerJoin, Relation::Jobs.def())
            .filter(Column::SeekerId.eq(seeker_id))
            .order_by_desc(Column::AppliedAt)
            .into_model::<SeekerQueryRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .map(|row| {
                Ok(SeekerApplicationRow {
                    id: row.id,
                    job_id: row.job_id,
                    job_title: row.job_title,
                    job_location: row.job_location,
                    company_logo: row.company_logo,
                    cover_letter: row.cover_letter,
                    resume_url: row.resume_url,
                    status: parse_status(&row.status)?,
                    applied_at: row.applied_at.into(),
                })
            })
            .collect()
    }

    async fn list_by_job(
        &self,
        job_id: Uuid,
    ) -> Result<Vec<JobApplicantRow>, ApplicationRepositoryError> {
        let rows = Entity::find()
            .select_only()
            .columns([
                Column::Id,
                Column::SeekerId,
                Column::CoverLetter,
                Column::ResumeUrl,
                Column::Status,
                Column::AppliedAt,
            ])
            .column_as(job_seeker_profiles::Column::FullName, "full_name")
            .column_as(job_seeker_profiles::Column::ContactNumber, "contact_number")
            .column_as(
                crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Email,
                "email",
            )
            .join(JoinType::InnerJoin, Relation::JobSeekerProfiles.def())
            .join(
                JoinType::InnerJoin,
                job_seeker_profiles::Relation::Users.def(),
            )
            .filter(Column::JobId.eq(job_id))
            .order_by_desc(Column::AppliedAt)
            .into_model::<ApplicantQueryRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .map(|row| {
                Ok(JobApplicantRow {
                    id: row.id,
                    seeker_id: row.seeker_id,
                    full_name: row.full_name,
                    email: row.email,
                    contact_number: row.contact_number,
                    cover_letter: row.cover_letter,
                    resume_url: row.resume_url,
                    status: parse_status(&row.status)?,
                    applied_at: row.applied_at.into(),
                })
            })
            .collect()
    }

    async fn set_status(
        &self,
        application_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<(), ApplicationRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::Status, Expr::value(status.as_str().to_string()))
            .filter(Column::Id.eq(application_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ApplicationRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn find_detail(
        &self,
        application_id: Uuid,
    ) -> Result<Option<ApplicationDetail>, ApplicationRepositoryError> {
        let row = Entity::find()
            .select_only()
            .columns([Column::Id, Column::JobId])
            .column_as(jobs::Column::Title, "job_title")
            .column_as(jobs::Column::EmployerId, "employer_id")
            .column_as(
                crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Email,
                "applicant_email",
            )
            .join(JoinType::InnerJoin, Relation::Jobs.def())
            .join(JoinType::InnerJoin, Relation::JobSeekerProfiles.def())
            .join(
                JoinType::InnerJoin,
                job_seeker_profiles::Relation::Users.def(),
            )
            .filter(Column::Id.eq(application_id))
            .into_model::<DetailQueryRow>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|row| ApplicationDetail {
            id: row.id,
            job_id: row.job_id,
            job_title: row.job_title,
            employer_id: row.employer_id,
            applicant_email: row.applicant_email,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn sample_model(status: &str) -> applications::Model {
        applications::Model {
            id: Uuid::new_v4(),
            job_id: Uuid::new_v4(),
            seeker_id: Uuid::new_v4(),
            cover_letter: Some("I build services".to_string()),
            resume_url: None,
            status: status.to_string(),
            applied_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_create_maps_model() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_model("pending")]])
            .into_connection();

        let repo = ApplicationRepositoryPostgres::new(Arc::new(db));

        let application = repo
            .create(CreateApplicationData {
                job_id: Uuid::new_v4(),
                seeker_id: Uuid::new_v4(),
                cover_letter: None,
                resume_url: None,
            })
            .await
            .unwrap();

        assert_eq!(application.status, ApplicationStatus::Pending);
    }

    #[tokio::test]
    async fn test_unique_violation_is_duplicate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"uq_applications_job_seeker\""
                    .to_string(),
            )])
            .into_connection();

        let repo = ApplicationRepositoryPostgres::new(Arc::new(db));

        let err = repo
            .create(CreateApplicationData {
                job_id: Uuid::new_v4(),
                seeker_id: Uuid::new_v4(),
                cover_letter: None,
                resume_url: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationRepositoryError::Duplicate));
    }

    #[tokio::test]
    async fn test_set_status_zero_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ApplicationRepositoryPostgres::new(Arc::new(db));

        let err = repo
            .set_status(Uuid::new_v4(), ApplicationStatus::Reviewed)
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationRepositoryError::NotFound));
    }
}
