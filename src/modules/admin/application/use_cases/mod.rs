pub mod delete_any_job;
pub mod delete_user;
pub mod list_users;
