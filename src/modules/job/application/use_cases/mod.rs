pub mod create_job;
pub mod delete_job;
pub mod get_my_jobs;
pub mod get_public_jobs;
pub mod get_public_single_job;
pub mod review_job;
pub mod update_job;
