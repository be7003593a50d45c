use std::sync::Arc;

use crate::modules::applications::application::use_cases::apply_to_job::IApplyToJobUseCase;
use crate::modules::applications::application::use_cases::get_job_applicants::IGetJobApplicantsUseCase;
use crate::modules::applications::application::use_cases::get_my_applications::IGetMyApplicationsUseCase;
use crate::modules::applications::application::use_cases::update_application_status::IUpdateApplicationStatusUseCase;

#[derive(Clone)]
pub struct ApplicationUseCases {
    pub apply: Arc<dyn IApplyToJobUseCase + Send + Sync>,
    pub mine: Arc<dyn IGetMyApplicationsUseCase + Send + Sync>,
    pub applicants: Arc<dyn IGetJobApplicantsUseCase + Send + Sync>,
    pub update_status: Arc<dyn IUpdateApplicationStatusUseCase + Send + Sync>,
}
