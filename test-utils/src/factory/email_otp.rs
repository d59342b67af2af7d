//! OTP factory.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for OTP rows; defaults to code `"123456"` valid for ten minutes.
pub struct EmailOtpFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    code: String,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl<'a> EmailOtpFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            db,
            email: email.into(),
            code: "123456".to_string(),
            expires_at: now + Duration::minutes(10),
            created_at: now,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::email_otp::Model, DbErr> {
        entity::email_otp::ActiveModel {
            email: ActiveValue::Set(self.email),
            code: ActiveValue::Set(self.code),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a valid OTP for `email` with the given code.
pub async fn create_otp(
    db: &DatabaseConnection,
    email: impl Into<String>,
    code: impl Into<String>,
) -> Result<entity::email_otp::Model, DbErr> {
    EmailOtpFactory::new(db, email).code(code).build().await
}
