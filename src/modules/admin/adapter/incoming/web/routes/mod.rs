pub mod admin_jobs;
pub mod admin_users;
