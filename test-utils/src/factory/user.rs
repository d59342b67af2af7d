//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .email("someone@example.com")
///     .plan("pro")
///     .queries_used(12)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    name: Option<String>,
    auth_provider: String,
    plan: String,
    queries_used: i32,
    is_verified: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - auth_provider: `"local"`
    /// - plan: `"free"`, queries_used: `0`
    /// - is_verified: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            name: Some(format!("User {}", id)),
            auth_provider: "local".to_string(),
            plan: "free".to_string(),
            queries_used: 0,
            is_verified: true,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn auth_provider(mut self, auth_provider: impl Into<String>) -> Self {
        self.auth_provider = auth_provider.into();
        self
    }

    pub fn plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = plan.into();
        self
    }

    pub fn queries_used(mut self, queries_used: i32) -> Self {
        self.queries_used = queries_used;
        self
    }

    pub fn verified(mut self, is_verified: bool) -> Self {
        self.is_verified = is_verified;
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            auth_provider: ActiveValue::Set(self.auth_provider),
            plan: ActiveValue::Set(self.plan),
            queries_used: ActiveValue::Set(self.queries_used),
            is_verified: ActiveValue::Set(self.is_verified),
            created_at: ActiveValue::Set(Utc::now()),
            last_login_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a verified free-plan user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a verified user with the given plan.
pub async fn create_user_with_plan(
    db: &DatabaseConnection,
    plan: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).plan(plan).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(user.email.ends_with("@example.com"));
        assert_eq!(user.plan, "free");
        assert_eq!(user.queries_used, 0);
        assert!(user.is_verified);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.id, user2.id);
        assert_ne!(user1.email, user2.email);

        Ok(())
    }
}
