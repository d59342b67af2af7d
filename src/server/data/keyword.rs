use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::keyword::{CreateKeywordParam, Keyword};

pub struct KeywordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KeywordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateKeywordParam) -> Result<Keyword, DbErr> {
        let entity = entity::keyword::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            keyword: ActiveValue::Set(param.keyword),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Keyword::from_entity(entity))
    }

    /// Keywords owned by the user, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Keyword>, DbErr> {
        let keywords = entity::prelude::Keyword::find()
            .filter(entity::keyword::Column::UserId.eq(user_id))
            .order_by_desc(entity::keyword::Column::CreatedAt)
            .order_by_desc(entity::keyword::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Keyword::from_entity)
            .collect();

        Ok(keywords)
    }

    pub async fn count_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Keyword::find()
            .filter(entity::keyword::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Deletes a keyword only when it belongs to `user_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Keyword deleted
    /// - `Ok(false)` - No such keyword for this user
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Keyword::delete_many()
            .filter(entity::keyword::Column::Id.eq(id))
            .filter(entity::keyword::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
