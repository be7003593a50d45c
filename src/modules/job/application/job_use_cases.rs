use std::sync::Arc;

use crate::modules::job::application::use_cases::create_job::ICreateJobUseCase;
use crate::modules::job::application::use_cases::delete_job::IDeleteJobUseCase;
use crate::modules::job::application::use_cases::get_my_jobs::IGetMyJobsUseCase;
use crate::modules::job::application::use_cases::get_public_jobs::IGetPublicJobsUseCase;
use crate::modules::job::application::use_cases::get_public_single_job::IGetPublicSingleJobUseCase;
use crate::modules::job::application::use_cases::review_job::IReviewJobUseCase;
use crate::modules::job::application::use_cases::update_job::IUpdateJobUseCase;

#[derive(Clone)]
pub struct JobUseCases {
    pub create: Arc<dyn ICreateJobUseCase + Send + Sync>,
    pub public_list: Arc<dyn IGetPublicJobsUseCase + Send + Sync>,
    pub public_single: Arc<dyn IGetPublicSingleJobUseCase + Send + Sync>,
    pub my_jobs: Arc<dyn IGetMyJobsUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateJobUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteJobUseCase + Send + Sync>,
    pub review: Arc<dyn IReviewJobUseCase + Send + Sync>,
}
