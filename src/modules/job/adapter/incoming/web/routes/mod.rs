pub mod create_job;
pub mod delete_job;
pub mod my_jobs;
pub mod public_jobs;
pub mod review_job;
pub mod update_job;
