use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::applications::application::use_cases::get_job_applicants::GetJobApplicantsError;
use crate::modules::auth::adapter::incoming::web::extractors::auth::EmployerUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/jobs/{id}/applicants")]
pub async fn job_applicants_handler(
    user: EmployerUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();

    match data
        .applications
        .applicants
        .execute(user.user_id, job_id)
        .await
    {
        Ok(rows) => ApiResponse::success(rows),

        Err(GetJobApplicantsError::JobNotFound) => {
            ApiResponse::not_found("JOB_NOT_FOUND", "Job not found")
        }

        Err(GetJobApplicantsError::NotJobOwner) => {
            ApiResponse::forbidden("NOT_JOB_OWNER", "You can only view applicants for your own jobs")
        }

        Err(GetJobApplicantsError::RepositoryError(e)) => {
            error!("Failed to list applicants: {}", e);
            ApiResponse::internal_error()
        }
    }
}
