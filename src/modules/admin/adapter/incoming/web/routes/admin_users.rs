use actix_web::{delete, get, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::admin::application::use_cases::delete_user::DeleteUserError;
use crate::modules::admin::application::use_cases::list_users::ListUsersError;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteUserQuery {
    #[serde(default)]
    pub hard: bool,
}

#[get("/api/admin/users")]
pub async fn list_users_handler(
    _admin: AdminUser,
    query: web::Query<ListUsersQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin.list_users.execute(query.role.as_deref()).await {
        Ok(users) => ApiResponse::success(users),

        Err(ListUsersError::InvalidRole) => ApiResponse::bad_request(
            "INVALID_ROLE",
            "Role must be one of admin, employer, jobseeker",
        ),

        Err(ListUsersError::RepositoryError(e)) => {
            error!("Failed to list users: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/users/{id}")]
pub async fn delete_user_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    query: web::Query<DeleteUserQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.admin.delete_user.execute(user_id, query.hard).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(DeleteUserError::RepositoryError(e)) => {
            error!("Failed to delete user {}: {}", user_id, e);
            ApiResponse::internal_error()
        }
    }
}
