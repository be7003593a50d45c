use actix_web::{put, web, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::modules::applications::application::use_cases::update_application_status::UpdateApplicationStatusError;
use crate::modules::auth::adapter::incoming::web::extractors::auth::EmployerUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct UpdateApplicationStatusRequest {
    pub status: String,
}

#[put("/api/applications/{id}/status")]
pub async fn update_application_status_handler(
    user: EmployerUser,
    path: web::Path<Uuid>,
    body: web::Json<UpdateApplicationStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let application_id = path.into_inner();

    match data
        .applications
        .update_status
        .execute(user.user_id, application_id, &body.status)
        .await
    {
        Ok(status) => ApiResponse::success(json!({
            "id": application_id,
            "status": status,
        })),

        Err(UpdateApplicationStatusError::NotFound) => {
            ApiResponse::not_found("APPLICATION_NOT_FOUND", "Application not found")
        }

        Err(UpdateApplicationStatusError::NotJobOwner) => ApiResponse::forbidden(
            "NOT_JOB_OWNER",
            "You can only manage applications for your own jobs",
        ),

        Err(UpdateApplicationStatusError::InvalidStatus) => ApiResponse::bad_request(
            "INVALID_STATUS",
            "Status must be one of reviewed, shortlisted, interviewed, rejected",
        ),

        Err(UpdateApplicationStatusError::RepositoryError(e)) => {
            error!("Failed to update application status: {}", e);
            ApiResponse::internal_error()
        }
    }
}
