use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::EmployerUser;
use crate::modules::job::application::use_cases::delete_job::DeleteJobError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/jobs/{id}")]
pub async fn delete_job_handler(
    user: EmployerUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();

    match data.jobs.delete.execute(job_id, user.user_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteJobError::NotFound) => ApiResponse::not_found("JOB_NOT_FOUND", "Job not found"),

        Err(DeleteJobError::RepositoryError(e)) => {
            error!("Failed to delete job: {}", e);
            ApiResponse::internal_error()
        }
    }
}
