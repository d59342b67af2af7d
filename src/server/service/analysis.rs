use sea_orm::DatabaseConnection;

use crate::{
    model::analysis::AnalysisDto,
    server::{
        config::Config,
        data::{search_history::SearchHistoryRepository, user::UserRepository},
        error::AppError,
        model::{analysis::TopicAnalysis, search_history::CreateSearchHistoryParam},
        service::{groq::GroqClient, usage::UsageService},
    },
};

pub struct AnalysisService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    config: &'a Config,
}

impl<'a> AnalysisService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        config: &'a Config,
    ) -> Self {
        Self {
            db,
            http_client,
            config,
        }
    }

    /// Runs an AI topic analysis for the user, consuming one query from their plan.
    ///
    /// The search is recorded in the user's history; a failed insert is logged only.
    ///
    /// # Returns
    /// - `Ok(AnalysisDto)` - Analysis with the user's usage after this query
    /// - `Err(AppError::BadRequest)` - Keyword is blank
    /// - `Err(AppError::NotFound)` - User no longer exists
    /// - `Err(QuotaError::QueryLimit)` - Plan limit already reached
    pub async fn analyze(&self, user_id: i32, keyword: &str) -> Result<AnalysisDto, AppError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(AppError::BadRequest("Keyword is required".to_string()));
        }

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        UsageService::new(self.db).consume(&user).await?;

        let analysis = GroqClient::new(self.http_client, self.config)
            .analyze(keyword)
            .await;

        self.record(user_id, keyword, &analysis).await;

        let user = user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(analysis.into_dto(&user))
    }

    async fn record(&self, user_id: i32, keyword: &str, analysis: &TopicAnalysis) {
        let param = CreateSearchHistoryParam {
            user_id,
            keyword: keyword.to_string(),
            sentiment: analysis.overall,
            volume: i32::try_from(analysis.volume).unwrap_or(i32::MAX),
            top_subreddit: analysis.top_instance().to_string(),
        };

        if let Err(e) = SearchHistoryRepository::new(self.db).create(param).await {
            tracing::error!("Failed to save search history for user {}: {}", user_id, e);
        }
    }
}
