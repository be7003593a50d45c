use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobSeekerProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobSeekerProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::FullName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::Address)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::ContactNumber)
                            .string_len(30)
                            .null(),
                    )
                    .col(ColumnDef::new(JobSeekerProfiles::PictureUrl).text().null())
                    .col(
                        ColumnDef::new(JobSeekerProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_seeker_profiles_user")
                            .from(JobSeekerProfiles::Table, JobSeekerProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmployerProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployerProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EmployerProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(EmployerProfiles::CompanyName)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployerProfiles::Address)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EmployerProfiles::ContactNumber)
                            .string_len(30)
                            .null(),
                    )
                    .col(ColumnDef::new(EmployerProfiles::PictureUrl).text().null())
                    .col(
                        ColumnDef::new(EmployerProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employer_profiles_user")
                            .from(EmployerProfiles::Table, EmployerProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployerProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JobSeekerProfiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum JobSeekerProfiles {
    Table,
    Id,
    UserId,
    FullName,
    Address,
    ContactNumber,
    PictureUrl,
    CreatedAt,
}

#[derive(Iden)]
enum EmployerProfiles {
    Table,
    Id,
    UserId,
    CompanyName,
    Address,
    ContactNumber,
    PictureUrl,
    CreatedAt,
}
