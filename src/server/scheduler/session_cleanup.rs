use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::{email_otp::EmailOtpRepository, session::SessionRepository},
    error::AppError,
};

/// Top of every hour.
const CLEANUP_SCHEDULE: &str = "0 0 * * * *";

/// Starts the hourly purge of expired bearer sessions and OTP codes.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(CLEANUP_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = purge_expired(&db).await {
                tracing::error!("Error purging expired credentials: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Session cleanup scheduler started");

    Ok(())
}

/// Deletes sessions and OTP codes whose expiry has passed.
///
/// # Returns
/// - `Ok((sessions, otps))` - Number of rows removed from each table
pub async fn purge_expired(db: &DatabaseConnection) -> Result<(u64, u64), AppError> {
    let now = Utc::now();

    let sessions = SessionRepository::new(db).delete_expired(now).await?;
    let otps = EmailOtpRepository::new(db).delete_expired(now).await?;

    if sessions > 0 || otps > 0 {
        tracing::info!(
            "Purged {} expired sessions and {} expired OTP codes",
            sessions,
            otps
        );
    }

    Ok((sessions, otps))
}
