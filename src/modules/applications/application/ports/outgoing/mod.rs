pub mod application_repository;
