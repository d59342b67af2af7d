use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::sentiment::Sentiment;

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchHistoryDto {
    pub history: Vec<SearchHistoryEntryDto>,
    pub stats: SearchHistoryStatsDto,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntryDto {
    pub keyword: String,
    pub sentiment: Sentiment,
    pub volume: i32,
    pub top_subreddit: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryStatsDto {
    pub total_searches: usize,
    /// Average score rendered as a percentage string, e.g. `"75%"`.
    pub avg_sentiment: String,
    pub total_posts: i64,
    pub unique_subreddits: usize,
}
