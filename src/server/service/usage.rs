//! Plan quota accounting.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{quota::QuotaError, AppError},
    model::user::User,
};

pub struct UsageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Consumes one analysis query for `user`.
    ///
    /// # Returns
    /// - `Ok(())` - Query recorded
    /// - `Err(QuotaError::QueryLimit)` - The plan limit was already reached
    pub async fn consume(&self, user: &User) -> Result<(), AppError> {
        let limit = user.plan.query_limit();
        let consumed = UserRepository::new(self.db)
            .try_consume_query(user.id, limit)
            .await?;

        if !consumed {
            return Err(QuotaError::QueryLimit {
                plan: user.plan,
                used: user.queries_used.max(limit),
                limit,
            }
            .into());
        }

        Ok(())
    }

    /// Counts a dashboard view against the user without enforcing any limit.
    ///
    /// Failures are logged and ignored so a counter problem never blocks the dashboard.
    pub async fn track(&self, user_id: i32) {
        if let Err(e) = UserRepository::new(self.db).increment_queries(user_id).await {
            tracing::warn!("Failed to track usage for user {}: {}", user_id, e);
        }
    }

    pub async fn reset(&self, user_id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db).reset_queries(user_id).await?;
        Ok(())
    }
}
