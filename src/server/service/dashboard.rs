use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::{
        DashboardKeywordDto, DashboardStatsDto, DashboardSummaryDto, DashboardUsageDto,
        DashboardUserDto,
    },
    server::{
        data::{keyword::KeywordRepository, user::UserRepository},
        error::AppError,
        model::{keyword::Keyword, news::KeywordNews},
        service::{
            news::{sentiment, NewsService},
            usage::UsageService,
        },
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
    feed_client: &'a reqwest::Client,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection, feed_client: &'a reqwest::Client) -> Self {
        Self { db, feed_client }
    }

    /// Builds the dashboard for a user from their keywords and live news coverage.
    ///
    /// Every view counts against the user's usage without being refused.
    ///
    /// # Returns
    /// - `Ok(DashboardSummaryDto)` - Dashboard data
    /// - `Err(AppError::NotFound)` - User no longer exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn summary(&self, user_id: i32) -> Result<DashboardSummaryDto, AppError> {
        UsageService::new(self.db).track(user_id).await;

        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let keyword_repo = KeywordRepository::new(self.db);
        let keywords = keyword_repo.get_by_user(user_id).await?;
        let active_keywords = keyword_repo.count_by_user(user_id).await?;

        let terms: Vec<String> = keywords.iter().map(|k| k.keyword.clone()).collect();
        let digest = NewsService::new(self.feed_client).digest(&terms).await;

        let keywords = keywords
            .into_iter()
            .map(|keyword| {
                let news = digest.keywords.iter().find(|n| n.keyword == keyword.keyword);
                keyword_summary(keyword, news)
            })
            .collect();

        Ok(DashboardSummaryDto {
            usage: DashboardUsageDto {
                queries_used: user.queries_used,
                limit: user.plan.query_limit(),
            },
            user: DashboardUserDto {
                email: user.email,
                plan: user.plan.as_str().to_string(),
            },
            keywords,
            stats: DashboardStatsDto { active_keywords },
            sentiment: digest.sentiment.into_dto(),
            timeline: digest.timeline.into_iter().map(|s| s.into_dto()).collect(),
            platforms: digest.platforms.into_iter().map(|p| p.into_dto()).collect(),
            alerts: digest.alerts.into_iter().map(|a| a.into_dto()).collect(),
        })
    }
}

/// Per-keyword card: share of upbeat headlines, trend and mention count.
fn keyword_summary(keyword: Keyword, news: Option<&KeywordNews>) -> DashboardKeywordDto {
    match news {
        Some(news) if news.mention_count > 0 => {
            let upbeat = news
                .items
                .iter()
                .filter(|item| sentiment::is_upbeat(&format!("{} {}", item.title, item.snippet)))
                .count();
            let score = (upbeat as f64 * 100.0 / news.mention_count as f64).round() as u32;

            DashboardKeywordDto {
                id: keyword.id,
                keyword: keyword.keyword,
                sentiment: Some(score),
                trend: news.trend.as_str().to_string(),
                mentions: news.mention_count.to_string(),
            }
        }
        _ => DashboardKeywordDto {
            id: keyword.id,
            keyword: keyword.keyword,
            sentiment: None,
            trend: "none".to_string(),
            mentions: "0".to_string(),
        },
    }
}
