use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::job::adapter::outgoing::sea_orm_entity::jobs::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::job::application::domain::{Job, JobStatus};
use crate::modules::job::application::ports::outgoing::job_repository::{
    JobFields, JobRepository, JobRepositoryError,
};

#[derive(Clone)]
pub struct JobRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JobRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch_required(&self, job_id: Uuid) -> Result<Job, JobRepositoryError> {
        let found = Entity::find_by_id(job_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        found
            .map(model_to_job)
            .transpose()?
            .ok_or(JobRepositoryError::NotFound)
    }
}

fn model_to_job(model: jobs::Model) -> Result<Job, JobRepositoryError> {
    let status = JobStatus::parse(&model.status).ok_or_else(|| {
        JobRepositoryError::DatabaseError(format!("unknown status in jobs row: {}", model.status))
    })?;

    Ok(Job {
        id: model.id,
        employer_id: model.employer_id,
        title: model.title,
        description: model.description,
        location: model.location,
        work_type: model.work_type,
        job_type: model.job_type,
        experience_level: model.experience_level,
        industry: model.industry,
        salary_min: model.salary_min,
        salary_max: model.salary_max,
        company_logo: model.company_logo,
        status,
        rejection_reason: model.rejection_reason,
        created_at: model.created_at.into(),
    })
}

fn map_db_err(e: DbErr) -> JobRepositoryError {
    JobRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl JobRepository for JobRepositoryPostgres {
    async fn create(
        &self,
        employer_id: Uuid,
        fields: JobFields,
    ) -> Result<Job, JobRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            employer_id: Set(employer_id),
            title: Set(fields.title),
            description: Set(fields.description),
            location: Set(fields.location),
            work_type: Set(fields.work_type),
            job_type: Set(fields.job_type),
            experience_level: Set(fields.experience_level),
            industry: Set(fields.industry),
            salary_min: Set(fields.salary_min),
            salary_max: Set(fields.salary_max),
            company_logo: Set(fields.company_logo),
            status: Set(JobStatus::Pending.as_str().to_string()),
            rejection_reason: Set(None),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_job(result)
    }

    async fn list_approved(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Job>, u64), JobRepositoryError> {
        let paginator = Entity::find()
            .filter(Column::Status.eq(JobStatus::Approved.as_str()))
            .order_by_desc(Column::CreatedAt)
            .paginate(&*self.db, per_page);

        let total = paginator.num_items().await.map_err(map_db_err)?;
        let rows = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(map_db_err)?;

        let jobs = rows
            .into_iter()
            .map(model_to_job)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((jobs, total))
    }

    async fn get_approved(&self, job_id: Uuid) -> Result<Job, JobRepositoryError> {
        let found = Entity::find()
            .filter(Column::Id.eq(job_id))
            .filter(Column::Status.eq(JobStatus::Approved.as_str()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        found
            .map(model_to_job)
            .transpose()?
            .ok_or(JobRepositoryError::NotFound)
    }

    async fn list_by_employer(&self, employer_id: Uuid) -> Result<Vec<Job>, JobRepositoryError> {
        let rows = Entity::find()
            .filter(Column::EmployerId.eq(employer_id))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_job).collect()
    }

    async fn update(
        &self,
        job_id: Uuid,
        employer_id: Uuid,
        fields: JobFields,
    ) -> Result<Job, JobRepositoryError> {
        let mut update = Entity::update_many()
            .col_expr(Column::Title, Expr::value(fields.title))
            .col_expr(Column::Description, Expr::value(fields.description))
            .col_expr(Column::Location, Expr::value(fields.location))
            .col_expr(Column::WorkType, Expr::value(fields.work_type))
            .col_expr(Column::JobType, Expr::value(fields.job_type))
            .col_expr(Column::ExperienceLevel, Expr::value(fields.experience_level))
            .col_expr(Column::Industry, Expr::value(fields.industry))
            .col_expr(Column::SalaryMin, Expr::value(fields.salary_min))
            .col_expr(Column::SalaryMax, Expr::value(fields.salary_max))
            .col_expr(
                Column::Status,
                Expr::value(JobStatus::Pending.as_str().to_string()),
            )
            .col_expr(Column::RejectionReason, Expr::value(Option::<String>::None));

        // A missing logo keeps the stored one.
        if let Some(logo) = fields.company_logo {
            update = update.col_expr(Column::CompanyLogo, Expr::value(logo));
        }

        let result = update
            .filter(Column::Id.eq(job_id))
            .filter(Column::EmployerId.eq(employer_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(JobRepositoryError::NotFound);
        }

        self.fetch_required(job_id).await
    }

    async fn delete(&self, job_id: Uuid, employer_id: Uuid) -> Result<(), JobRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(job_id))
            .filter(Column::EmployerId.eq(employer_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(JobRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete_any(&self, job_id: Uuid) -> Result<(), JobRepositoryError> {
        // Scoped by id alone; moderation may delete any employer's posting.
        let result = Entity::delete_by_id(job_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(JobRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn set_status(
        &self,
        job_id: Uuid,
        status: JobStatus,
        rejection_reason: Option<String>,
    ) -> Result<Job, JobRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::Status, Expr::value(status.as_str().to_string()))
            .col_expr(Column::RejectionReason, Expr::value(rejection_reason))
            .filter(Column::Id.eq(job_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(JobRepositoryError::NotFound);
        }

        self.fetch_required(job_id).await
    }

    async fn find_by_id(&self, job_id: Uuid) -> Result<Option<Job>, JobRepositoryError> {
        let found = Entity::find_by_id(job_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        found.map(model_to_job).transpose()
    }
}
