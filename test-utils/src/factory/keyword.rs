//! Keyword factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for tracked keywords; defaults to `"keyword {id}"` created now.
pub struct KeywordFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    keyword: String,
    created_at: DateTime<Utc>,
}

impl<'a> KeywordFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            keyword: format!("keyword {}", next_id()),
            created_at: Utc::now(),
        }
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::keyword::Model, DbErr> {
        entity::keyword::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            keyword: ActiveValue::Set(self.keyword),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_keyword(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::keyword::Model, DbErr> {
    KeywordFactory::new(db, user_id).build().await
}
