use actix_web::{delete, get, put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::EmployerUser;
use crate::modules::profile::application::ports::outgoing::profile_repository::UpsertEmployerProfileData;
use crate::modules::profile::application::use_cases::employer_profile::EmployerProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpsertEmployerProfileRequest {
    pub company_name: String,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub picture_url: Option<String>,
}

#[get("/api/profile/employer")]
pub async fn get_employer_profile_handler(
    user: EmployerUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profiles.employer.fetch(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(EmployerProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Employer profile not found")
        }

        Err(e) => {
            error!("Failed to fetch employer profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/profile/employer")]
pub async fn upsert_employer_profile_handler(
    user: EmployerUser,
    req: web::Json<UpsertEmployerProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let input = UpsertEmployerProfileData {
        company_name: req.company_name,
        address: req.address,
        contact_number: req.contact_number,
        picture_url: req.picture_url,
    };

    match data.profiles.employer.upsert(user.user_id, input).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(EmployerProfileError::MissingCompanyName) => {
            ApiResponse::bad_request("MISSING_COMPANY_NAME", "Company name must not be empty")
        }

        Err(e) => {
            error!("Failed to upsert employer profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/profile/employer/picture")]
pub async fn delete_employer_picture_handler(
    user: EmployerUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profiles.employer.delete_picture(user.user_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(EmployerProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Employer profile not found")
        }

        Err(e) => {
            error!("Failed to delete employer profile picture: {}", e);
            ApiResponse::internal_error()
        }
    }
}
