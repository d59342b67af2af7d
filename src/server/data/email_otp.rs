//! One-time passcode persistence.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct EmailOtpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmailOtpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        email: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::email_otp::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            code: ActiveValue::Set(code.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Whether `code` was issued to `email` and has not expired at `now`.
    pub async fn is_valid(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::EmailOtp::find()
            .filter(entity::email_otp::Column::Email.eq(email))
            .filter(entity::email_otp::Column::Code.eq(code))
            .filter(entity::email_otp::Column::ExpiresAt.gt(now))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Removes every code issued to `email`.
    pub async fn delete_by_email(&self, email: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::EmailOtp::delete_many()
            .filter(entity::email_otp::Column::Email.eq(email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::EmailOtp::delete_many()
            .filter(entity::email_otp::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
