use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub job_id: Uuid,

    /// References job_seeker_profiles.id, not users.id.
    #[sea_orm(column_type = "Uuid")]
    pub seeker_id: Uuid,

    #[sea_orm(column_type = "Text", nullable)]
    pub cover_letter: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub resume_url: Option<String>,

    /// pending | reviewed | shortlisted | interviewed | rejected
    #[sea_orm(column_type = "Text", string_len = 20)]
    pub status: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub applied_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::job::adapter::outgoing::sea_orm_entity::jobs::Entity",
        from = "Column::JobId",
        to = "crate::modules::job::adapter::outgoing::sea_orm_entity::jobs::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Jobs,

    #[sea_orm(
        belongs_to = "crate::modules::profile::adapter::outgoing::sea_orm_entity::job_seeker_profiles::Entity",
        from = "Column::SeekerId",
        to = "crate::modules::profile::adapter::outgoing::sea_orm_entity::job_seeker_profiles::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    JobSeekerProfiles,
}

impl Related<crate::modules::job::adapter::outgoing::sea_orm_entity::jobs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Jobs.def()
    }
}

impl Related<crate::modules::profile::adapter::outgoing::sea_orm_entity::job_seeker_profiles::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::JobSeekerProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
