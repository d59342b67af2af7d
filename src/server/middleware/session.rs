//! Type-safe wrappers over the cookie session.
//!
//! API requests authenticate with bearer tokens, so the cookie session only carries
//! state that must survive the redirect to Google and back.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_OAUTH_CSRF_TOKEN: &str = "oauth:csrf_token";

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for the Google OAuth flow. Tokens are
/// stored when the login redirect is issued and consumed by the callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_OAUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token so each token is only accepted once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_OAUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    /// Expected: token is returned once, then gone
    #[tokio::test]
    async fn token_can_only_be_taken_once() {
        let mut test = TestBuilder::new().build().await.unwrap();
        let (_, session) = test.db_and_session().await.unwrap();
        let csrf = CsrfSession::new(session);

        csrf.set_token("state-123".to_string()).await.unwrap();

        assert_eq!(csrf.take_token().await.unwrap().as_deref(), Some("state-123"));
        assert_eq!(csrf.take_token().await.unwrap(), None);
    }
}
