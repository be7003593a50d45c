pub mod job_repository_postgres;
pub mod sea_orm_entity;
