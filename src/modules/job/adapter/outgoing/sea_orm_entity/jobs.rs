use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub employer_id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub location: String,

    #[sea_orm(column_type = "Text", string_len = 50)]
    pub work_type: String,

    #[sea_orm(column_type = "Text", string_len = 50)]
    pub job_type: String,

    #[sea_orm(column_type = "Text", string_len = 50)]
    pub experience_level: String,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub industry: String,

    #[sea_orm(column_type = "BigInteger", nullable)]
    pub salary_min: Option<i64>,

    #[sea_orm(column_type = "BigInteger", nullable)]
    pub salary_max: Option<i64>,

    #[sea_orm(column_type = "Text", nullable)]
    pub company_logo: Option<String>,

    /// pending | approved | rejected | closed
    #[sea_orm(column_type = "Text", string_len = 20)]
    pub status: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub rejection_reason: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::EmployerId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,

    #[sea_orm(
        has_many = "crate::modules::applications::adapter::outgoing::sea_orm_entity::applications::Entity"
    )]
    Applications,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<crate::modules::applications::adapter::outgoing::sea_orm_entity::applications::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
