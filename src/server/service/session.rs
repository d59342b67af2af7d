use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::session::SessionRepository,
    error::AppError,
    model::{
        session::{session_ttl, Session},
        user::User,
    },
};

pub struct SessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a new random bearer token valid for seven days.
    pub async fn create(&self, user_id: i32) -> Result<Session, AppError> {
        let token = uuid::Uuid::new_v4().to_string();
        let expires_at = Utc::now() + session_ttl();

        let session = SessionRepository::new(self.db)
            .create(user_id, token, expires_at)
            .await?;

        Ok(session)
    }

    /// Returns the owner of a live session, if any.
    pub async fn authenticate(&self, token: &str) -> Result<Option<User>, AppError> {
        let user = SessionRepository::new(self.db)
            .find_user_by_token(token, Utc::now())
            .await?;

        Ok(user)
    }

    /// Revokes a token. Unknown tokens are not an error.
    pub async fn revoke(&self, token: &str) -> Result<(), AppError> {
        SessionRepository::new(self.db).delete_by_token(token).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_utils::{builder::TestBuilder, factory};

    /// Expected: new sessions expire seven days from now and resolve to their owner
    #[tokio::test]
    async fn create_issues_seven_day_session() {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await.unwrap();
        let service = SessionService::new(db);

        let before = Utc::now();
        let session = service.create(user.id).await.unwrap();
        let after = Utc::now();

        assert_eq!(session_ttl(), Duration::days(7));
        let slack = Duration::seconds(1);
        assert!(session.expires_at >= before + session_ttl() - slack);
        assert!(session.expires_at <= after + session_ttl() + slack);

        let owner = service.authenticate(&session.token).await.unwrap();
        assert_eq!(owner.map(|u| u.id), Some(user.id));
    }

    /// Expected: revoked tokens no longer authenticate
    #[tokio::test]
    async fn revoke_invalidates_token() {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await.unwrap();
        let service = SessionService::new(db);
        let session = service.create(user.id).await.unwrap();

        service.revoke(&session.token).await.unwrap();

        assert!(service.authenticate(&session.token).await.unwrap().is_none());
    }
}
