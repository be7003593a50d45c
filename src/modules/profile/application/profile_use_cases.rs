use std::sync::Arc;

use crate::modules::profile::application::use_cases::employer_profile::IEmployerProfileUseCase;
use crate::modules::profile::application::use_cases::seeker_profile::ISeekerProfileUseCase;

#[derive(Clone)]
pub struct ProfileUseCases {
    pub seeker: Arc<dyn ISeekerProfileUseCase + Send + Sync>,
    pub employer: Arc<dyn IEmployerProfileUseCase + Send + Sync>,
}
