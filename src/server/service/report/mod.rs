//! Search history reports and exports.

pub mod csv;
pub mod pdf;

use std::collections::HashSet;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::report::{SearchHistoryDto, SearchHistoryStatsDto},
    server::{
        data::search_history::SearchHistoryRepository, error::AppError,
        model::search_history::SearchHistoryEntry,
    },
};

/// Rows shown in the history view; exports include everything.
const HISTORY_LIMIT: u64 = 50;

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Most recent searches with aggregate statistics over them.
    pub async fn history(&self, user_id: i32) -> Result<SearchHistoryDto, AppError> {
        let entries = SearchHistoryRepository::new(self.db)
            .get_by_user(user_id, Some(HISTORY_LIMIT))
            .await?;

        let stats = stats(&entries);

        Ok(SearchHistoryDto {
            history: entries.into_iter().map(|e| e.into_dto()).collect(),
            stats,
        })
    }

    pub async fn export_csv(&self, user_id: i32) -> Result<String, AppError> {
        let entries = SearchHistoryRepository::new(self.db)
            .get_by_user(user_id, None)
            .await?;

        Ok(csv::render(&entries))
    }

    pub async fn export_pdf(&self, user_id: i32) -> Result<Vec<u8>, AppError> {
        let entries = SearchHistoryRepository::new(self.db)
            .get_by_user(user_id, None)
            .await?;

        Ok(pdf::render(&entries, Utc::now()))
    }
}

/// Totals over `entries`; the average sentiment reads `"0%"` when there are none.
pub fn stats(entries: &[SearchHistoryEntry]) -> SearchHistoryStatsDto {
    let avg_sentiment = if entries.is_empty() {
        "0%".to_string()
    } else {
        let total: u32 = entries.iter().map(|e| e.sentiment.score()).sum();
        let avg = (total as f64 / entries.len() as f64).round() as u32;
        format!("{}%", avg)
    };

    SearchHistoryStatsDto {
        total_searches: entries.len(),
        avg_sentiment,
        total_posts: entries.iter().map(|e| e.volume as i64).sum(),
        unique_subreddits: entries
            .iter()
            .map(|e| e.top_subreddit.as_str())
            .collect::<HashSet<_>>()
            .len(),
    }
}
