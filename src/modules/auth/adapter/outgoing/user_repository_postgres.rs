use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::auth::application::domain::entities::{Role, User};
use crate::modules::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError,
};

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_user(model: users::Model) -> Result<User, UserRepositoryError> {
    let role = Role::parse(&model.role).ok_or_else(|| {
        UserRepositoryError::DatabaseError(format!("unknown role in users row: {}", model.role))
    })?;

    Ok(User {
        id: model.id,
        full_name: model.full_name,
        email: model.email,
        password_hash: model.password_hash,
        role,
        is_verified: model.is_verified,
        is_deleted: model.is_deleted,
        created_at: model.created_at.into(),
    })
}

fn map_email_error(e: DbErr) -> UserRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("email")
    {
        UserRepositoryError::EmailAlreadyExists
    } else {
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(data.full_name),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            role: Set(data.role.as_str().to_string()),
            is_verified: Set(false),
            is_deleted: Set(false),
            created_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_email_error)?;

        model_to_user(result)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let found = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        found.map(model_to_user).transpose()
    }

    async fn list_users(&self, role: Option<Role>) -> Result<Vec<User>, UserRepositoryError> {
        let mut query = Entity::find().order_by_desc(Column::CreatedAt);

        if let Some(role) = role {
            query = query.filter(Column::Role.eq(role.as_str()));
        }

        let rows = query.all(&*self.db).await.map_err(map_db_err)?;

        rows.into_iter().map(model_to_user).collect()
    }

    async fn soft_delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::IsDeleted, Expr::value(true))
            .filter(Column::Id.eq(user_id))
            .filter(Column::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn hard_delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let result = Entity::delete_by_id(user_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl UserQuery for UserRepositoryPostgres {
    async fn email_by_user_id(&self, user_id: Uuid) -> Result<String, UserQueryError> {
        let found = Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        found
            .map(|u| u.email)
            .ok_or(UserQueryError::NotFound)
    }
}
