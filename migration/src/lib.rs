pub use sea_orm_migration::prelude::*;

mod m20250810_000001_create_users_table;
mod m20250810_000002_create_profiles_tables;
mod m20250810_000003_create_jobs_table;
mod m20250810_000004_create_applications_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000001_create_users_table::Migration),
            Box::new(m20250810_000002_create_profiles_tables::Migration),
            Box::new(m20250810_000003_create_jobs_table::Migration),
            Box::new(m20250810_000004_create_applications_table::Migration),
        ]
    }
}
