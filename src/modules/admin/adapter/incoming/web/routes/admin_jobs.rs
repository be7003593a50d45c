use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::admin::application::use_cases::delete_any_job::DeleteAnyJobError;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/jobs/{id}")]
pub async fn admin_delete_job_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();

    match data.admin.delete_job.execute(job_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteAnyJobError::NotFound) => {
            ApiResponse::not_found("JOB_NOT_FOUND", "Job not found")
        }

        Err(DeleteAnyJobError::RepositoryError(e)) => {
            error!("Failed to delete job {}: {}", job_id, e);
            ApiResponse::internal_error()
        }
    }
}
