//! Search history domain models.
//!
//! Every successful analysis leaves one row behind; reports read them back.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::{report::SearchHistoryEntryDto, sentiment::Sentiment};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHistoryEntry {
    pub id: i32,
    pub keyword: String,
    pub sentiment: Sentiment,
    /// Estimated discussion volume reported by the analysis.
    pub volume: i32,
    /// Instance of the first example post.
    pub top_subreddit: String,
    pub created_at: DateTime<Utc>,
}

impl SearchHistoryEntry {
    /// # Returns
    /// - `Err(DbErr::Custom)` - Stored sentiment is not one of the known labels
    pub fn from_entity(entity: entity::search_history::Model) -> Result<Self, DbErr> {
        let sentiment = entity
            .sentiment
            .parse::<Sentiment>()
            .map_err(|value| DbErr::Custom(format!("Unknown sentiment '{}'", value)))?;

        Ok(Self {
            id: entity.id,
            keyword: entity.keyword,
            sentiment,
            volume: entity.volume,
            top_subreddit: entity.top_subreddit,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> SearchHistoryEntryDto {
        SearchHistoryEntryDto {
            keyword: self.keyword,
            sentiment: self.sentiment,
            volume: self.volume,
            top_subreddit: self.top_subreddit,
            timestamp: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSearchHistoryParam {
    pub user_id: i32,
    pub keyword: String,
    pub sentiment: Sentiment,
    pub volume: i32,
    pub top_subreddit: String,
}
