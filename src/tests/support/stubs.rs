//! Default fillers for every AppState slot. Each stub fails loudly when
//! called so a route test that forgot to swap in its own mock is obvious.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::admin::application::use_cases::delete_any_job::{
    DeleteAnyJobError, IDeleteAnyJobUseCase,
};
use crate::modules::admin::application::use_cases::delete_user::{
    DeleteUserError, IDeleteUserUseCase,
};
use crate::modules::admin::application::use_cases::list_users::{IListUsersUseCase, ListUsersError};
use crate::modules::applications::application::domain::ApplicationStatus;
use crate::modules::applications::application::use_cases::apply_to_job::{
    ApplyToJobError, ApplyToJobInput, IApplyToJobUseCase, SubmittedApplication,
};
use crate::modules::applications::application::use_cases::get_job_applicants::{
    ApplicantRow, GetJobApplicantsError, IGetJobApplicantsUseCase,
};
use crate::modules::applications::application::use_cases::get_my_applications::{
    GetMyApplicationsError, IGetMyApplicationsUseCase, MyApplicationRow,
};
use crate::modules::applications::application::use_cases::update_application_status::{
    IUpdateApplicationStatusUseCase, UpdateApplicationStatusError,
};
use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginUserError, LoginUserOutput,
};
use crate::modules::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserOutput,
};
use crate::modules::job::application::domain::Job;
use crate::modules::job::application::use_cases::create_job::{
    CreateJobError, CreateJobInput, ICreateJobUseCase,
};
use crate::modules::job::application::use_cases::delete_job::{DeleteJobError, IDeleteJobUseCase};
use crate::modules::job::application::use_cases::get_my_jobs::{GetMyJobsError, IGetMyJobsUseCase};
use crate::modules::job::application::use_cases::get_public_jobs::{
    GetPublicJobsError, IGetPublicJobsUseCase, PublicJobsPage,
};
use crate::modules::job::application::use_cases::get_public_single_job::{
    GetPublicSingleJobError, IGetPublicSingleJobUseCase,
};
use crate::modules::job::application::use_cases::review_job::{IReviewJobUseCase, ReviewJobError};
use crate::modules::job::application::use_cases::update_job::{IUpdateJobUseCase, UpdateJobError};
use crate::modules::profile::application::domain::entities::{EmployerProfile, SeekerProfile};
use crate::modules::profile::application::ports::outgoing::profile_repository::{
    UpsertEmployerProfileData, UpsertSeekerProfileData,
};
use crate::modules::profile::application::use_cases::employer_profile::{
    EmployerProfileError, IEmployerProfileUseCase,
};
use crate::modules::profile::application::use_cases::seeker_profile::{
    ISeekerProfileUseCase, SeekerProfileError,
};

const NOT_WIRED: &str = "stub use case not wired in this test";

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _full_name: String,
        _email: String,
        _password: String,
        _role: String,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(
        &self,
        _email: String,
        _password: String,
    ) -> Result<LoginUserOutput, LoginUserError> {
        Err(LoginUserError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubSeekerProfileUseCase;

#[async_trait]
impl ISeekerProfileUseCase for StubSeekerProfileUseCase {
    async fn fetch(&self, _user_id: Uuid) -> Result<SeekerProfile, SeekerProfileError> {
        Err(SeekerProfileError::RepositoryError(NOT_WIRED.to_string()))
    }

    async fn upsert(
        &self,
        _user_id: Uuid,
        _data: UpsertSeekerProfileData,
    ) -> Result<SeekerProfile, SeekerProfileError> {
        Err(SeekerProfileError::RepositoryError(NOT_WIRED.to_string()))
    }

    async fn delete_picture(&self, _user_id: Uuid) -> Result<(), SeekerProfileError> {
        Err(SeekerProfileError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubEmployerProfileUseCase;

#[async_trait]
impl IEmployerProfileUseCase for StubEmployerProfileUseCase {
    async fn fetch(&self, _user_id: Uuid) -> Result<EmployerProfile, EmployerProfileError> {
        Err(EmployerProfileError::RepositoryError(NOT_WIRED.to_string()))
    }

    async fn upsert(
        &self,
        _user_id: Uuid,
        _data: UpsertEmployerProfileData,
    ) -> Result<EmployerProfile, EmployerProfileError> {
        Err(EmployerProfileError::RepositoryError(NOT_WIRED.to_string()))
    }

    async fn delete_picture(&self, _user_id: Uuid) -> Result<(), EmployerProfileError> {
        Err(EmployerProfileError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubCreateJobUseCase;

#[async_trait]
impl ICreateJobUseCase for StubCreateJobUseCase {
    async fn execute(
        &self,
        _employer_id: Uuid,
        _input: CreateJobInput,
    ) -> Result<Job, CreateJobError> {
        Err(CreateJobError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubGetPublicJobsUseCase;

#[async_trait]
impl IGetPublicJobsUseCase for StubGetPublicJobsUseCase {
    async fn execute(
        &self,
        _page: Option<u64>,
        _per_page: Option<u64>,
    ) -> Result<PublicJobsPage, GetPublicJobsError> {
        Err(GetPublicJobsError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubGetPublicSingleJobUseCase;

#[async_trait]
impl IGetPublicSingleJobUseCase for StubGetPublicSingleJobUseCase {
    async fn execute(&self, _job_id: Uuid) -> Result<Job, GetPublicSingleJobError> {
        Err(GetPublicSingleJobError::RepositoryError(
            NOT_WIRED.to_string(),
        ))
    }
}

pub struct StubGetMyJobsUseCase;

#[async_trait]
impl IGetMyJobsUseCase for StubGetMyJobsUseCase {
    async fn execute(&self, _employer_id: Uuid) -> Result<Vec<Job>, GetMyJobsError> {
        Err(GetMyJobsError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubUpdateJobUseCase;

#[async_trait]
impl IUpdateJobUseCase for StubUpdateJobUseCase {
    async fn execute(
        &self,
        _job_id: Uuid,
        _employer_id: Uuid,
        _input: CreateJobInput,
    ) -> Result<Job, UpdateJobError> {
        Err(UpdateJobError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubDeleteJobUseCase;

#[async_trait]
impl IDeleteJobUseCase for StubDeleteJobUseCase {
    async fn execute(&self, _job_id: Uuid, _employer_id: Uuid) -> Result<(), DeleteJobError> {
        Err(DeleteJobError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubReviewJobUseCase;

#[async_trait]
impl IReviewJobUseCase for StubReviewJobUseCase {
    async fn execute(
        &self,
        _job_id: Uuid,
        _decision: &str,
        _reason: Option<String>,
    ) -> Result<Job, ReviewJobError> {
        Err(ReviewJobError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubApplyToJobUseCase;

#[async_trait]
impl IApplyToJobUseCase for StubApplyToJobUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _job_id: Uuid,
        _input: ApplyToJobInput,
    ) -> Result<SubmittedApplication, ApplyToJobError> {
        Err(ApplyToJobError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubGetMyApplicationsUseCase;

#[async_trait]
impl IGetMyApplicationsUseCase for StubGetMyApplicationsUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<Vec<MyApplicationRow>, GetMyApplicationsError> {
        Err(GetMyApplicationsError::RepositoryError(
            NOT_WIRED.to_string(),
        ))
    }
}

pub struct StubGetJobApplicantsUseCase;

#[async_trait]
impl IGetJobApplicantsUseCase for StubGetJobApplicantsUseCase {
    async fn execute(
        &self,
        _employer_user_id: Uuid,
        _job_id: Uuid,
    ) -> Result<Vec<ApplicantRow>, GetJobApplicantsError> {
        Err(GetJobApplicantsError::RepositoryError(
            NOT_WIRED.to_string(),
        ))
    }
}

pub struct StubUpdateApplicationStatusUseCase;

#[async_trait]
impl IUpdateApplicationStatusUseCase for StubUpdateApplicationStatusUseCase {
    async fn execute(
        &self,
        _employer_id: Uuid,
        _application_id: Uuid,
        _status: &str,
    ) -> Result<ApplicationStatus, UpdateApplicationStatusError> {
        Err(UpdateApplicationStatusError::RepositoryError(
            NOT_WIRED.to_string(),
        ))
    }
}

pub struct StubListUsersUseCase;

#[async_trait]
impl IListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self, _role: Option<&str>) -> Result<Vec<User>, ListUsersError> {
        Err(ListUsersError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubDeleteUserUseCase;

#[async_trait]
impl IDeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _user_id: Uuid, _hard: bool) -> Result<(), DeleteUserError> {
        Err(DeleteUserError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubDeleteAnyJobUseCase;

#[async_trait]
impl IDeleteAnyJobUseCase for StubDeleteAnyJobUseCase {
    async fn execute(&self, _job_id: Uuid) -> Result<(), DeleteAnyJobError> {
        Err(DeleteAnyJobError::RepositoryError(NOT_WIRED.to_string()))
    }
}
