use std::sync::Arc;

use crate::modules::admin::application::use_cases::delete_any_job::IDeleteAnyJobUseCase;
use crate::modules::admin::application::use_cases::delete_user::IDeleteUserUseCase;
use crate::modules::admin::application::use_cases::list_users::IListUsersUseCase;

#[derive(Clone)]
pub struct AdminUseCases {
    pub list_users: Arc<dyn IListUsersUseCase + Send + Sync>,
    pub delete_user: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    pub delete_job: Arc<dyn IDeleteAnyJobUseCase + Send + Sync>,
}
