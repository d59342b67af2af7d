//! OAuth2 login with Google

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{AuthProvider, CreateUserParam, User},
    service::auth::normalize_email,
    state::OAuth2Client,
};

const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Subset of the OpenID Connect userinfo document we rely on.
#[derive(Debug, Deserialize)]
struct GoogleUserInfo {
    email: Option<String>,
    name: Option<String>,
}

/// Normalised profile email; absent or blank addresses are rejected.
fn profile_email(profile: &GoogleUserInfo) -> Result<String, AuthError> {
    profile
        .email
        .as_deref()
        .map(normalize_email)
        .filter(|email| !email.is_empty())
        .ok_or(AuthError::MissingEmail)
}

pub struct GoogleAuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> GoogleAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Builds the consent screen URL together with the CSRF state to remember.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url()
    }

    /// Exchanges the authorization code and finds or creates the Google account.
    ///
    /// # Returns
    /// - `Ok(User)` - Verified user owning the Google email
    /// - `Err(AuthError::TokenExchange)` - Google rejected the code
    /// - `Err(AuthError::MissingEmail)` - Profile had no email address
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let profile = self
            .http_client
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<GoogleUserInfo>()
            .await?;

        let email = profile_email(&profile)?;

        let user = match user_repo.find_by_email(&email).await? {
            Some(existing) => user_repo.mark_verified(existing.id).await?,
            None => {
                tracing::info!("Creating Google account for {}", email);
                let created = user_repo
                    .create(CreateUserParam {
                        email,
                        name: profile.name,
                        auth_provider: AuthProvider::Google,
                        is_verified: true,
                    })
                    .await?;
                user_repo.mark_verified(created.id).await?
            }
        };

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(email: Option<&str>) -> GoogleUserInfo {
        GoogleUserInfo {
            email: email.map(str::to_string),
            name: Some("Someone".to_string()),
        }
    }

    #[test]
    fn normalizes_profile_email() {
        let email = profile_email(&profile(Some(" Someone@Gmail.com "))).unwrap();
        assert_eq!(email, "someone@gmail.com");
    }

    /// Expected: a blank email is treated the same as a missing one
    #[test]
    fn rejects_blank_or_missing_email() {
        assert!(matches!(
            profile_email(&profile(Some("   "))),
            Err(AuthError::MissingEmail)
        ));
        assert!(matches!(
            profile_email(&profile(None)),
            Err(AuthError::MissingEmail)
        ));
    }
}
