use chrono::{Duration, Utc};
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{email_otp::EmailOtpRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        session::Session,
        user::{AuthProvider, CreateUserParam, User},
    },
    service::{
        email::{DeliveryReport, EmailService},
        session::SessionService,
    },
};

/// How long an issued code stays valid.
pub fn otp_ttl() -> Duration {
    Duration::minutes(10)
}

/// Random six-digit code in `100000..=999999`.
pub fn generate_code() -> String {
    rand::rng().random_range(100_000..=999_999).to_string()
}

/// A freshly stored code and how its delivery went.
#[derive(Debug)]
pub struct IssuedOtp {
    pub code: String,
    pub delivery: DeliveryReport,
}

pub struct OtpAuthService<'a> {
    db: &'a DatabaseConnection,
    email: EmailService<'a>,
}

impl<'a> OtpAuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, email: EmailService<'a>) -> Self {
        Self { db, email }
    }

    /// Starts signup: creates an unverified local account if needed and sends a code.
    ///
    /// # Returns
    /// - `Ok(IssuedOtp)` - Code stored and delivery attempted
    /// - `Err(AuthError::AlreadyRegistered)` - A verified account owns this email
    pub async fn request_signup(
        &self,
        email: &str,
        name: Option<String>,
    ) -> Result<IssuedOtp, AppError> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.find_by_email(email).await? {
            Some(user) if user.is_verified => {
                return Err(AuthError::AlreadyRegistered(email.to_string()).into());
            }
            Some(_) => {}
            None => {
                user_repo
                    .create(CreateUserParam {
                        email: email.to_string(),
                        name: name.filter(|n| !n.trim().is_empty()),
                        auth_provider: AuthProvider::Local,
                        is_verified: false,
                    })
                    .await?;
            }
        }

        self.issue(email).await
    }

    /// Sends a login code to an existing verified account.
    ///
    /// # Returns
    /// - `Err(AuthError::AccountNotFound)` - No account for this email
    /// - `Err(AuthError::AccountNotVerified)` - Signup was never completed
    pub async fn request_login(&self, email: &str) -> Result<IssuedOtp, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AuthError::AccountNotFound(email.to_string()).into());
        };

        if !user.is_verified {
            return Err(AuthError::AccountNotVerified(email.to_string()).into());
        }

        self.issue(email).await
    }

    /// Checks a code, verifies the account and opens a session.
    ///
    /// Codes are single use: all codes for the email are removed on success.
    ///
    /// # Returns
    /// - `Ok((User, Session))` - Verified user with a new bearer session
    /// - `Err(AuthError::InvalidOtp)` - Code unknown, mismatched or expired
    /// - `Err(AppError::NotFound)` - The account disappeared after the code was issued
    pub async fn verify(&self, email: &str, code: &str) -> Result<(User, Session), AppError> {
        let otp_repo = EmailOtpRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        if !otp_repo.is_valid(email, code.trim(), Utc::now()).await? {
            return Err(AuthError::InvalidOtp(email.to_string()).into());
        }

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let user = user_repo.mark_verified(user.id).await?;
        otp_repo.delete_by_email(email).await?;

        let session = SessionService::new(self.db).create(user.id).await?;

        Ok((user, session))
    }

    async fn issue(&self, email: &str) -> Result<IssuedOtp, AppError> {
        let code = generate_code();

        EmailOtpRepository::new(self.db)
            .create(email, &code, Utc::now() + otp_ttl())
            .await?;

        let delivery = self.email.send_otp(email, &code).await;

        Ok(IssuedOtp { code, delivery })
    }
}
