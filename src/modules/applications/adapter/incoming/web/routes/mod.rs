pub mod apply_to_job;
pub mod job_applicants;
pub mod my_applications;
pub mod update_application_status;
