use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::search_history::{CreateSearchHistoryParam, SearchHistoryEntry};

pub struct SearchHistoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchHistoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: CreateSearchHistoryParam,
    ) -> Result<SearchHistoryEntry, DbErr> {
        let entity = entity::search_history::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            keyword: ActiveValue::Set(param.keyword),
            sentiment: ActiveValue::Set(param.sentiment.as_str().to_string()),
            volume: ActiveValue::Set(param.volume),
            top_subreddit: ActiveValue::Set(param.top_subreddit),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        SearchHistoryEntry::from_entity(entity)
    }

    /// History rows for the user, newest first, optionally capped at `limit`.
    pub async fn get_by_user(
        &self,
        user_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<SearchHistoryEntry>, DbErr> {
        let mut query = entity::prelude::SearchHistory::find()
            .filter(entity::search_history::Column::UserId.eq(user_id))
            .order_by_desc(entity::search_history::Column::CreatedAt)
            .order_by_desc(entity::search_history::Column::Id);

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        query
            .all(self.db)
            .await?
            .into_iter()
            .map(SearchHistoryEntry::from_entity)
            .collect()
    }
}
