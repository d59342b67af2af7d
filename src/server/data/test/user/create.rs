use super::*;

/// Tests creating a local account through the OTP signup path.
///
/// Verifies that new accounts start on the free plan with no queries used and
/// keep the unverified flag they were created with.
///
/// Expected: Ok with free, unverified user
#[tokio::test]
async fn creates_unverified_free_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "new@example.com".to_string(),
            name: Some("New User".to_string()),
            auth_provider: AuthProvider::Local,
            is_verified: false,
        })
        .await?;

    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.plan, Plan::Free);
    assert_eq!(user.queries_used, 0);
    assert!(!user.is_verified);
    assert!(user.last_login_at.is_none());

    let found = repo.find_by_email("new@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that email addresses are unique.
///
/// Expected: Err on second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            email: "taken@example.com".to_string(),
            name: None,
            auth_provider: AuthProvider::Google,
            is_verified: true,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that a row with an unknown plan is reported instead of silently coerced.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .plan("enterprise")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_id(user.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
