use super::*;

/// Tests logging out a single session.
///
/// Expected: Ok(1) and the token no longer resolves
#[tokio::test]
async fn deletes_session_by_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, session) = factory::helpers::create_authenticated_user(db).await?;

    let repo = SessionRepository::new(db);
    let deleted = repo.delete_by_token(&session.refresh_token).await?;

    assert_eq!(deleted, 1);
    assert!(repo
        .find_user_by_token(&session.refresh_token, Utc::now())
        .await?
        .is_none());

    Ok(())
}

/// Tests purging expired sessions while keeping live ones.
///
/// Expected: Ok(1) with only the expired row removed
#[tokio::test]
async fn purges_only_expired_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let live = factory::create_session(db, user.id).await?;
    factory::session::SessionFactory::new(db, user.id)
        .expired()
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let purged = repo.delete_expired(Utc::now()).await?;

    assert_eq!(purged, 1);
    assert!(repo
        .find_user_by_token(&live.refresh_token, Utc::now())
        .await?
        .is_some());

    Ok(())
}
