//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database,
//! including the plan and usage counter updates that gate paid features.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, Plan, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Inserts a new account on the free plan with no queries used.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            auth_provider: ActiveValue::Set(param.auth_provider.as_str().to_string()),
            plan: ActiveValue::Set(Plan::Free.as_str().to_string()),
            queries_used: ActiveValue::Set(0),
            is_verified: ActiveValue::Set(param.is_verified),
            created_at: ActiveValue::Set(Utc::now()),
            last_login_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Marks the account verified and stamps the login time.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with this ID
    pub async fn mark_verified(&self, id: i32) -> Result<User, DbErr> {
        let entity = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User with id {} not found", id)))?;

        let mut active: entity::user::ActiveModel = entity.into();
        active.is_verified = ActiveValue::Set(true);
        active.last_login_at = ActiveValue::Set(Some(Utc::now()));

        let updated = active.update(self.db).await?;

        User::from_entity(updated)
    }

    /// Uses one analysis query if the user is still under `limit`.
    ///
    /// The check and increment happen in a single `UPDATE`, so concurrent requests
    /// cannot push the counter past the limit.
    ///
    /// # Returns
    /// - `Ok(true)` - A query was consumed
    /// - `Ok(false)` - The user is at or above the limit (or does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn try_consume_query(&self, id: i32, limit: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::QueriesUsed,
                Expr::cust("queries_used + 1"),
            )
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::QueriesUsed.lt(limit))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Increments the usage counter without checking any limit.
    pub async fn increment_queries(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::QueriesUsed,
                Expr::cust("queries_used + 1"),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn reset_queries(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::QueriesUsed, Expr::value(0))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Moves the user to Pro and starts a fresh usage period.
    ///
    /// # Returns
    /// - `Ok(true)` - The user was upgraded
    /// - `Ok(false)` - No user with this ID
    pub async fn upgrade_to_pro(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Plan,
                Expr::value(Plan::Pro.as_str()),
            )
            .col_expr(entity::user::Column::QueriesUsed, Expr::value(0))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
