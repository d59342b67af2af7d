//! Session factory for creating bearer sessions.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating sessions; defaults to a fresh UUID token valid for seven days.
pub struct SessionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    refresh_token: String,
    expires_at: DateTime<Utc>,
}

impl<'a> SessionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            refresh_token: uuid::Uuid::new_v4().to_string(),
            expires_at: Utc::now() + Duration::days(7),
        }
    }

    pub fn refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = refresh_token.into();
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Marks the session as already expired.
    pub fn expired(self) -> Self {
        self.expires_at(Utc::now() - Duration::minutes(1))
    }

    pub async fn build(self) -> Result<entity::session::Model, DbErr> {
        entity::session::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            refresh_token: ActiveValue::Set(self.refresh_token),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a live session for the given user.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::session::Model, DbErr> {
    SessionFactory::new(db, user_id).build().await
}
