use super::*;

/// Tests resolving a live session token to its user.
///
/// Expected: Ok(Some(User)) for the session owner
#[tokio::test]
async fn resolves_live_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, session) = factory::helpers::create_authenticated_user(db).await?;

    let repo = SessionRepository::new(db);
    let found = repo
        .find_user_by_token(&session.refresh_token, Utc::now())
        .await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that expired sessions no longer authenticate.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let session = factory::session::SessionFactory::new(db, user.id)
        .expired()
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let found = repo
        .find_user_by_token(&session.refresh_token, Utc::now())
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that an unknown token resolves to nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = SessionRepository::new(db)
        .find_user_by_token("not-a-token", Utc::now())
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a freshly created session is valid for seven days.
///
/// Expected: token resolves now and stops resolving after expiry
#[tokio::test]
async fn created_session_expires_at_given_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = SessionRepository::new(db);
    let expires_at = Utc::now() + Duration::days(7);
    let session = repo
        .create(user.id, "fresh-token".to_string(), expires_at)
        .await?;

    assert_eq!(session.user_id, user.id);
    assert!(repo
        .find_user_by_token("fresh-token", Utc::now())
        .await?
        .is_some());
    assert!(repo
        .find_user_by_token("fresh-token", expires_at + Duration::seconds(1))
        .await?
        .is_none());

    Ok(())
}
