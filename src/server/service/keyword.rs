use sea_orm::DatabaseConnection;

use crate::server::{
    data::keyword::KeywordRepository,
    error::{quota::QuotaError, AppError},
    model::{
        keyword::{CreateKeywordParam, Keyword},
        user::User,
    },
};

pub struct KeywordService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KeywordService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<Keyword>, AppError> {
        let keywords = KeywordRepository::new(self.db).get_by_user(user_id).await?;
        Ok(keywords)
    }

    /// Adds a tracked keyword, enforcing the plan's keyword limit.
    ///
    /// # Returns
    /// - `Ok(Keyword)` - Newly tracked keyword
    /// - `Err(AppError::BadRequest)` - Keyword is blank
    /// - `Err(QuotaError::KeywordLimit)` - Plan limit reached
    pub async fn add(&self, user: &User, keyword: &str) -> Result<Keyword, AppError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(AppError::BadRequest("Keyword is required".to_string()));
        }

        let repo = KeywordRepository::new(self.db);

        if let Some(limit) = user.plan.keyword_limit() {
            if repo.count_by_user(user.id).await? >= limit {
                return Err(QuotaError::KeywordLimit { limit }.into());
            }
        }

        let keyword = repo
            .create(CreateKeywordParam {
                user_id: user.id,
                keyword: keyword.to_string(),
            })
            .await?;

        Ok(keyword)
    }

    /// Deletes one of the user's keywords.
    ///
    /// Deleting a keyword that does not exist or belongs to someone else is a no-op.
    pub async fn remove(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let deleted = KeywordRepository::new(self.db).delete(user_id, id).await?;

        if !deleted {
            tracing::debug!("User {} tried to delete missing keyword {}", user_id, id);
        }

        Ok(())
    }
}
