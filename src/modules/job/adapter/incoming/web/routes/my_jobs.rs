use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::EmployerUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/jobs/my-jobs")]
pub async fn my_jobs_handler(user: EmployerUser, data: web::Data<AppState>) -> impl Responder {
    match data.jobs.my_jobs.execute(user.user_id).await {
        Ok(jobs) => ApiResponse::success(jobs),

        Err(e) => {
            error!("Failed to list employer jobs: {}", e);
            ApiResponse::internal_error()
        }
    }
}
