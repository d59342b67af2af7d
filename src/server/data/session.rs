//! Bearer session persistence.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::{session::Session, user::User};

pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<Session, DbErr> {
        let entity = entity::session::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            refresh_token: ActiveValue::Set(token),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Session::from_entity(entity))
    }

    /// Resolves a token to its owner, ignoring sessions that expired before `now`.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Live session found
    /// - `Ok(None)` - Unknown or expired token, or the user row is gone
    /// - `Err(DbErr)` - Database error during lookup
    pub async fn find_user_by_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::Session::find()
            .filter(entity::session::Column::RefreshToken.eq(token))
            .filter(entity::session::Column::ExpiresAt.gt(now))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        match result {
            Some((_, Some(user))) => Ok(Some(User::from_entity(user)?)),
            _ => Ok(None),
        }
    }

    /// Deletes a single session, returning how many rows were removed.
    pub async fn delete_by_token(&self, token: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::RefreshToken.eq(token))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
