use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::application::use_cases::register_user::RegisterUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data
        .auth
        .register
        .execute(req.full_name, req.email, req.password, req.role)
        .await
    {
        Ok(user) => ApiResponse::created(user),

        Err(RegisterUserError::InvalidEmail) => {
            ApiResponse::bad_request("INVALID_EMAIL", "Email address is not valid")
        }

        Err(RegisterUserError::InvalidRole) => ApiResponse::bad_request(
            "INVALID_ROLE",
            "Role must be one of admin, employer, jobseeker",
        ),

        Err(RegisterUserError::WeakPassword) => ApiResponse::bad_request(
            "WEAK_PASSWORD",
            "Password must be at least 8 characters",
        ),

        Err(RegisterUserError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email already registered")
        }

        Err(RegisterUserError::HashingFailed(e)) => {
            error!("Password hashing failed during registration: {}", e);
            ApiResponse::internal_error()
        }

        Err(RegisterUserError::RepositoryError(e)) => {
            error!("Repository error during registration: {}", e);
            ApiResponse::internal_error()
        }
    }
}
