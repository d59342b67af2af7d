use chrono::{DateTime, Utc};

use crate::model::keyword::KeywordDto;

/// Keyword a user tracks on their dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub id: i32,
    pub user_id: i32,
    pub keyword: String,
    pub created_at: DateTime<Utc>,
}

impl Keyword {
    pub fn from_entity(entity: entity::keyword::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            keyword: entity.keyword,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> KeywordDto {
        KeywordDto {
            id: self.id,
            keyword: self.keyword,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateKeywordParam {
    pub user_id: i32,
    /// Already trimmed and non-empty.
    pub keyword: String,
}
