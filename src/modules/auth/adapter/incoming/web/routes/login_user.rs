use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::application::use_cases::login_user::LoginUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginUserRequest {
    pub email: String,
    pub password: String,
}

#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data.auth.login.execute(req.email, req.password).await {
        Ok(out) => ApiResponse::success(out),

        Err(LoginUserError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginUserError::AccountDisabled) => {
            ApiResponse::forbidden("ACCOUNT_DISABLED", "This account has been deactivated")
        }

        Err(LoginUserError::TokenGenerationFailed(e)) => {
            error!("Token generation failed during login: {}", e);
            ApiResponse::internal_error()
        }

        Err(LoginUserError::RepositoryError(e)) => {
            error!("Repository error during login: {}", e);
            ApiResponse::internal_error()
        }
    }
}
