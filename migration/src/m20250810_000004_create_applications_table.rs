use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Applications::JobId).uuid().not_null())
                    .col(ColumnDef::new(Applications::SeekerId).uuid().not_null())
                    .col(ColumnDef::new(Applications::CoverLetter).text().null())
                    .col(ColumnDef::new(Applications::ResumeUrl).text().null())
                    .col(
                        ColumnDef::new(Applications::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Applications::AppliedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_job")
                            .from(Applications::Table, Applications::JobId)
                            .to(Jobs::Table, Jobs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_seeker")
                            .from(Applications::Table, Applications::SeekerId)
                            .to(JobSeekerProfiles::Table, JobSeekerProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Authoritative duplicate-application guard. The workflow pre-check
        // is only an optimization; racing inserts lose here.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_applications_job_seeker")
                    .table(Applications::Table)
                    .col(Applications::JobId)
                    .col(Applications::SeekerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_applications_seeker_applied_at")
                    .table(Applications::Table)
                    .col(Applications::SeekerId)
                    .col(Applications::AppliedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Jobs {
    Table,
    Id,
}

#[derive(Iden)]
enum JobSeekerProfiles {
    Table,
    Id,
}

#[derive(Iden)]
enum Applications {
    Table,
    Id,
    JobId,
    SeekerId,
    CoverLetter,
    ResumeUrl,
    Status,
    AppliedAt,
}
