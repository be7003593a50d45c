use actix_multipart::Multipart;
use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::EmployerUser;
use crate::modules::job::adapter::incoming::web::routes::create_job::{
    job_input_from_form, multipart_error_response,
};
use crate::modules::job::application::use_cases::update_job::UpdateJobError;
use crate::shared::api::ApiResponse;
use crate::shared::web::multipart::read_form;
use crate::AppState;

#[put("/api/jobs/{id}")]
pub async fn update_job_handler(
    user: EmployerUser,
    path: web::Path<Uuid>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();

    let form = match read_form(payload).await {
        Ok(form) => form,
        Err(e) => return multipart_error_response(e),
    };

    let input = match job_input_from_form(&form) {
        Ok(input) => input,
        Err(resp) => return resp,
    };

    match data.jobs.update.execute(job_id, user.user_id, input).await {
        Ok(job) => ApiResponse::success(job),

        Err(UpdateJobError::NotFound) => ApiResponse::not_found("JOB_NOT_FOUND", "Job not found"),

        Err(UpdateJobError::MissingField(name)) => ApiResponse::bad_request(
            "MISSING_FIELD",
            &format!("Field '{}' must not be empty", name),
        ),

        Err(UpdateJobError::InvalidSalaryRange) => ApiResponse::bad_request(
            "INVALID_SALARY_RANGE",
            "salary_min must not exceed salary_max",
        ),

        Err(UpdateJobError::RepositoryError(e)) => {
            error!("Failed to update job: {}", e);
            ApiResponse::internal_error()
        }
    }
}
