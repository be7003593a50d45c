use actix_web::{delete, get, put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::JobSeekerUser;
use crate::modules::profile::application::ports::outgoing::profile_repository::UpsertSeekerProfileData;
use crate::modules::profile::application::use_cases::seeker_profile::SeekerProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpsertSeekerProfileRequest {
    pub full_name: String,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub picture_url: Option<String>,
}

#[get("/api/profile/seeker")]
pub async fn get_seeker_profile_handler(
    user: JobSeekerUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profiles.seeker.fetch(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(SeekerProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Job seeker profile not found")
        }

        Err(e) => {
            error!("Failed to fetch seeker profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/profile/seeker")]
pub async fn upsert_seeker_profile_handler(
    user: JobSeekerUser,
    req: web::Json<UpsertSeekerProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let input = UpsertSeekerProfileData {
        full_name: req.full_name,
        address: req.address,
        contact_number: req.contact_number,
        picture_url: req.picture_url,
    };

    match data.profiles.seeker.upsert(user.user_id, input).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(SeekerProfileError::MissingFullName) => {
            ApiResponse::bad_request("MISSING_FULL_NAME", "Full name must not be empty")
        }

        Err(e) => {
            error!("Failed to upsert seeker profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/profile/seeker/picture")]
pub async fn delete_seeker_picture_handler(
    user: JobSeekerUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profiles.seeker.delete_picture(user.user_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(SeekerProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Job seeker profile not found")
        }

        Err(e) => {
            error!("Failed to delete seeker profile picture: {}", e);
            ApiResponse::internal_error()
        }
    }
}
