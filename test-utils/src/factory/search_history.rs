//! Search history factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for search history rows.
///
/// Defaults: keyword `"rust"`, sentiment `"neutral"`, volume `100`,
/// top_subreddit `"mastodon.social"`, created now.
pub struct SearchHistoryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    keyword: String,
    sentiment: String,
    volume: i32,
    top_subreddit: String,
    created_at: DateTime<Utc>,
}

impl<'a> SearchHistoryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            keyword: "rust".to_string(),
            sentiment: "neutral".to_string(),
            volume: 100,
            top_subreddit: "mastodon.social".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn sentiment(mut self, sentiment: impl Into<String>) -> Self {
        self.sentiment = sentiment.into();
        self
    }

    pub fn volume(mut self, volume: i32) -> Self {
        self.volume = volume;
        self
    }

    pub fn top_subreddit(mut self, top_subreddit: impl Into<String>) -> Self {
        self.top_subreddit = top_subreddit.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::search_history::Model, DbErr> {
        entity::search_history::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            keyword: ActiveValue::Set(self.keyword),
            sentiment: ActiveValue::Set(self.sentiment),
            volume: ActiveValue::Set(self.volume),
            top_subreddit: ActiveValue::Set(self.top_subreddit),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_search_history(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::search_history::Model, DbErr> {
    SearchHistoryFactory::new(db, user_id).build().await
}
