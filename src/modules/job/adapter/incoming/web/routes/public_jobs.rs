use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::job::application::use_cases::get_public_single_job::GetPublicSingleJobError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListJobsQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[get("/api/jobs")]
pub async fn list_public_jobs_handler(
    query: web::Query<ListJobsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .jobs
        .public_list
        .execute(query.page, query.per_page)
        .await
    {
        Ok(page) => ApiResponse::success(page),

        Err(e) => {
            error!("Failed to list public jobs: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/jobs/{id}")]
pub async fn get_public_job_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();

    match data.jobs.public_single.execute(job_id).await {
        Ok(job) => ApiResponse::success(job),

        Err(GetPublicSingleJobError::NotFound) => {
            ApiResponse::not_found("JOB_NOT_FOUND", "Job not found")
        }

        Err(e) => {
            error!("Failed to fetch public job: {}", e);
            ApiResponse::internal_error()
        }
    }
}
