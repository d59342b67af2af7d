use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub auth_provider: String,
    pub plan: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}
