pub mod admin;
pub mod applications;
pub mod auth;
pub mod email;
pub mod job;
pub mod profile;
pub mod storage;
