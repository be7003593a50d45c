use actix_web::web;
use std::sync::Arc;

use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::use_cases::delete_any_job::IDeleteAnyJobUseCase;
use crate::modules::admin::application::use_cases::delete_user::IDeleteUserUseCase;
use crate::modules::admin::application::use_cases::list_users::IListUsersUseCase;
use crate::modules::applications::application::application_use_cases::ApplicationUseCases;
use crate::modules::applications::application::use_cases::apply_to_job::IApplyToJobUseCase;
use crate::modules::applications::application::use_cases::get_job_applicants::IGetJobApplicantsUseCase;
use crate::modules::applications::application::use_cases::get_my_applications::IGetMyApplicationsUseCase;
use crate::modules::applications::application::use_cases::update_application_status::IUpdateApplicationStatusUseCase;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::modules::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::modules::job::application::job_use_cases::JobUseCases;
use crate::modules::job::application::use_cases::create_job::ICreateJobUseCase;
use crate::modules::job::application::use_cases::delete_job::IDeleteJobUseCase;
use crate::modules::job::application::use_cases::get_my_jobs::IGetMyJobsUseCase;
use crate::modules::job::application::use_cases::get_public_jobs::IGetPublicJobsUseCase;
use crate::modules::job::application::use_cases::get_public_single_job::IGetPublicSingleJobUseCase;
use crate::modules::job::application::use_cases::review_job::IReviewJobUseCase;
use crate::modules::job::application::use_cases::update_job::IUpdateJobUseCase;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::profile::application::use_cases::employer_profile::IEmployerProfileUseCase;
use crate::modules::profile::application::use_cases::seeker_profile::ISeekerProfileUseCase;
use crate::AppState;

use super::stubs::*;

/// Builds an AppState where every slot is a failing stub until a test swaps
/// in the mock it cares about.
pub struct TestAppStateBuilder {
    register: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    seeker_profile: Arc<dyn ISeekerProfileUseCase + Send + Sync>,
    employer_profile: Arc<dyn IEmployerProfileUseCase + Send + Sync>,
    create_job: Arc<dyn ICreateJobUseCase + Send + Sync>,
    public_jobs: Arc<dyn IGetPublicJobsUseCase + Send + Sync>,
    public_single_job: Arc<dyn IGetPublicSingleJobUseCase + Send + Sync>,
    my_jobs: Arc<dyn IGetMyJobsUseCase + Send + Sync>,
    update_job: Arc<dyn IUpdateJobUseCase + Send + Sync>,
    delete_job: Arc<dyn IDeleteJobUseCase + Send + Sync>,
    review_job: Arc<dyn IReviewJobUseCase + Send + Sync>,
    apply: Arc<dyn IApplyToJobUseCase + Send + Sync>,
    my_applications: Arc<dyn IGetMyApplicationsUseCase + Send + Sync>,
    job_applicants: Arc<dyn IGetJobApplicantsUseCase + Send + Sync>,
    update_status: Arc<dyn IUpdateApplicationStatusUseCase + Send + Sync>,
    list_users: Arc<dyn IListUsersUseCase + Send + Sync>,
    delete_user: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    admin_delete_job: Arc<dyn IDeleteAnyJobUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register: Arc::new(StubRegisterUserUseCase),
            login: Arc::new(StubLoginUserUseCase),
            seeker_profile: Arc::new(StubSeekerProfileUseCase),
            employer_profile: Arc::new(StubEmployerProfileUseCase),
            create_job: Arc::new(StubCreateJobUseCase),
            public_jobs: Arc::new(StubGetPublicJobsUseCase),
            public_single_job: Arc::new(StubGetPublicSingleJobUseCase),
            my_jobs: Arc::new(StubGetMyJobsUseCase),
            update_job: Arc::new(StubUpdateJobUseCase),
            delete_job: Arc::new(StubDeleteJobUseCase),
            review_job: Arc::new(StubReviewJobUseCase),
            apply: Arc::new(StubApplyToJobUseCase),
            my_applications: Arc::new(StubGetMyApplicationsUseCase),
            job_applicants: Arc::new(StubGetJobApplicantsUseCase),
            update_status: Arc::new(StubUpdateApplicationStatusUseCase),
            list_users: Arc::new(StubListUsersUseCase),
            delete_user: Arc::new(StubDeleteUserUseCase),
            admin_delete_job: Arc::new(StubDeleteAnyJobUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register(mut self, uc: Arc<dyn IRegisterUserUseCase + Send + Sync>) -> Self {
        self.register = uc;
        self
    }

    pub fn with_login(mut self, uc: Arc<dyn ILoginUserUseCase + Send + Sync>) -> Self {
        self.login = uc;
        self
    }

    pub fn with_seeker_profile(mut self, uc: Arc<dyn ISeekerProfileUseCase + Send + Sync>) -> Self {
        self.seeker_profile = uc;
        self
    }

    pub fn with_employer_profile(
        mut self,
        uc: Arc<dyn IEmployerProfileUseCase + Send + Sync>,
    ) -> Self {
        self.employer_profile = uc;
        self
    }

    pub fn with_create_job(mut self, uc: Arc<dyn ICreateJobUseCase + Send + Sync>) -> Self {
        self.create_job = uc;
        self
    }

    pub fn with_public_jobs(mut self, uc: Arc<dyn IGetPublicJobsUseCase + Send + Sync>) -> Self {
        self.public_jobs = uc;
        self
    }

    pub fn with_public_single_job(
        mut self,
        uc: Arc<dyn IGetPublicSingleJobUseCase + Send + Sync>,
    ) -> Self {
        self.public_single_job = uc;
        self
    }

    pub fn with_my_jobs(mut self, uc: Arc<dyn IGetMyJobsUseCase + Send + Sync>) -> Self {
        self.my_jobs = uc;
        self
    }

    pub fn with_update_job(mut self, uc: Arc<dyn IUpdateJobUseCase + Send + Sync>) -> Self {
        self.update_job = uc;
        self
    }

    pub fn with_delete_job(mut self, uc: Arc<dyn IDeleteJobUseCase + Send + Sync>) -> Self {
        self.delete_job = uc;
        self
    }

    pub fn with_review_job(mut self, uc: Arc<dyn IReviewJobUseCase + Send + Sync>) -> Self {
        self.review_job = uc;
        self
    }

    pub fn with_apply(mut self, uc: Arc<dyn IApplyToJobUseCase + Send + Sync>) -> Self {
        self.apply = uc;
        self
    }

    pub fn with_my_applications(
        mut self,
        uc: Arc<dyn IGetMyApplicationsUseCase + Send + Sync>,
    ) -> Self {
        self.my_applications = uc;
        self
    }

    pub fn with_job_applicants(
        mut self,
        uc: Arc<dyn IGetJobApplicantsUseCase + Send + Sync>,
    ) -> Self {
        self.job_applicants = uc;
        self
    }

    pub fn with_update_status(
        mut self,
        uc: Arc<dyn IUpdateApplicationStatusUseCase + Send + Sync>,
    ) -> Self {
        self.update_status = uc;
        self
    }

    pub fn with_list_users(mut self, uc: Arc<dyn IListUsersUseCase + Send + Sync>) -> Self {
        self.list_users = uc;
        self
    }

    pub fn with_delete_user(mut self, uc: Arc<dyn IDeleteUserUseCase + Send + Sync>) -> Self {
        self.delete_user = uc;
        self
    }

    pub fn with_admin_delete_job(
        mut self,
        uc: Arc<dyn IDeleteAnyJobUseCase + Send + Sync>,
    ) -> Self {
        self.admin_delete_job = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: AuthUseCases {
                register: self.register,
                login: self.login,
            },
            profiles: ProfileUseCases {
                seeker: self.seeker_profile,
                employer: self.employer_profile,
            },
            jobs: JobUseCases {
                create: self.create_job,
                public_list: self.public_jobs,
                public_single: self.public_single_job,
                my_jobs: self.my_jobs,
                update: self.update_job,
                delete: self.delete_job,
                review: self.review_job,
            },
            applications: ApplicationUseCases {
                apply: self.apply,
                mine: self.my_applications,
                applicants: self.job_applicants,
                update_status: self.update_status,
            },
            admin: AdminUseCases {
                list_users: self.list_users,
                delete_user: self.delete_user,
                delete_job: self.admin_delete_job,
            },
        })
    }
}
