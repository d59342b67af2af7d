//! Bearer session models.

use chrono::{DateTime, Duration, Utc};

/// Lifetime of a bearer session.
pub fn session_ttl() -> Duration {
    Duration::days(7)
}

/// Opaque bearer token issued after a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user_id: i32,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn from_entity(entity: entity::session::Model) -> Self {
        Self {
            token: entity.refresh_token,
            user_id: entity.user_id,
            expires_at: entity.expires_at,
        }
    }
}
