use actix_web::http::StatusCode;
use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::applications::application::use_cases::apply_to_job::PROFILE_REDIRECT_HINT;
use crate::modules::applications::application::use_cases::get_my_applications::GetMyApplicationsError;
use crate::modules::auth::adapter::incoming::web::extractors::auth::JobSeekerUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/applications/mine")]
pub async fn my_applications_handler(
    user: JobSeekerUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.applications.mine.execute(user.user_id).await {
        Ok(rows) => ApiResponse::success(rows),

        Err(GetMyApplicationsError::ProfileRequired) => ApiResponse::error_with_hint(
            StatusCode::BAD_REQUEST,
            "PROFILE_REQUIRED",
            "Create a job seeker profile first",
            PROFILE_REDIRECT_HINT,
        ),

        Err(GetMyApplicationsError::RepositoryError(e)) => {
            error!("Failed to list applications: {}", e);
            ApiResponse::internal_error()
        }
    }
}
