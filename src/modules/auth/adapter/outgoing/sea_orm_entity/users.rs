use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub full_name: String,

    #[sea_orm(column_type = "Text", string_len = 255, unique)]
    pub email: String,

    #[sea_orm(column_type = "Text", string_len = 255)]
    pub password_hash: String,

    // admin | employer | jobseeker
    #[sea_orm(column_type = "Text", string_len = 20)]
    pub role: String,

    pub is_verified: bool,

    pub is_deleted: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::modules::job::adapter::outgoing::sea_orm_entity::jobs::Entity")]
    Jobs,
}

impl Related<crate::modules::job::adapter::outgoing::sea_orm_entity::jobs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Jobs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
