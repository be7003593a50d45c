use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Jobs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Jobs::EmployerId).uuid().not_null())
                    .col(ColumnDef::new(Jobs::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Jobs::Description).text().not_null())
                    .col(ColumnDef::new(Jobs::Location).string_len(150).not_null())
                    .col(ColumnDef::new(Jobs::WorkType).string_len(50).not_null())
                    .col(ColumnDef::new(Jobs::JobType).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Jobs::ExperienceLevel)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Jobs::Industry).string_len(100).not_null())
                    .col(ColumnDef::new(Jobs::SalaryMin).big_integer().null())
                    .col(ColumnDef::new(Jobs::SalaryMax).big_integer().null())
                    .col(ColumnDef::new(Jobs::CompanyLogo).text().null())
                    .col(
                        ColumnDef::new(Jobs::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Jobs::RejectionReason).text().null())
                    .col(
                        ColumnDef::new(Jobs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_employer")
                            .from(Jobs::Table, Jobs::EmployerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The public listing filters on status, newest first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_jobs_status_created_at")
                    .table(Jobs::Table)
                    .col(Jobs::Status)
                    .col(Jobs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_jobs_employer_id")
                    .table(Jobs::Table)
                    .col(Jobs::EmployerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Jobs {
    Table,
    Id,
    EmployerId,
    Title,
    Description,
    Location,
    WorkType,
    JobType,
    ExperienceLevel,
    Industry,
    SalaryMin,
    SalaryMax,
    CompanyLogo,
    Status,
    RejectionReason,
    CreatedAt,
}
