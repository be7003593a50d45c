pub mod application_repository_postgres;
pub mod sea_orm_entity;
