//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a verified user together with a live session.
///
/// # Returns
/// - `Ok((user, session))` - The created user and their bearer session
/// - `Err(DbErr)` - Database error during creation
pub async fn create_authenticated_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::session::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let session = crate::factory::session::create_session(db, user.id).await?;

    Ok((user, session))
}
