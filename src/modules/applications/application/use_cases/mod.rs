pub mod apply_to_job;
pub mod get_job_applicants;
pub mod get_my_applications;
pub mod update_application_status;
