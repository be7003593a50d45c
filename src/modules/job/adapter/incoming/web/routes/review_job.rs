use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::job::application::use_cases::review_job::ReviewJobError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ReviewJobRequest {
    pub decision: String,
    pub reason: Option<String>,
}

#[put("/api/jobs/{id}/review")]
pub async fn review_job_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ReviewJobRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();
    let req = req.into_inner();

    match data
        .jobs
        .review
        .execute(job_id, &req.decision, req.reason)
        .await
    {
        Ok(job) => ApiResponse::success(job),

        Err(ReviewJobError::NotFound) => ApiResponse::not_found("JOB_NOT_FOUND", "Job not found"),

        Err(ReviewJobError::InvalidDecision) => ApiResponse::bad_request(
            "INVALID_DECISION",
            "Decision must be 'approved' or 'rejected'",
        ),

        Err(ReviewJobError::RepositoryError(e)) => {
            error!("Failed to review job: {}", e);
            ApiResponse::internal_error()
        }
    }
}
