use super::*;

/// Tests that a live session resolves to its user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn resolves_user_from_live_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, session) = factory::helpers::create_authenticated_user(db).await?;
    let headers = bearer(&session.refresh_token);

    let resolved = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.email, user.email);

    Ok(())
}

/// Tests that unknown tokens are rejected.
///
/// Expected: Err(AuthError::InvalidSession)
#[tokio::test]
async fn rejects_unknown_token() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = bearer("not-a-session");

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidSession))
    ));
}

/// Tests that expired sessions no longer authenticate.
///
/// Expected: Err(AuthError::InvalidSession)
#[tokio::test]
async fn rejects_expired_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let session = factory::session::SessionFactory::new(db, user.id)
        .expired()
        .build()
        .await?;
    let headers = bearer(&session.refresh_token);

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidSession))
    ));

    Ok(())
}

/// Tests that free users cannot pass the Pro permission.
///
/// Expected: Err(AuthError::ProRequired)
#[tokio::test]
async fn denies_pro_permission_to_free_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, session) = factory::helpers::create_authenticated_user(db).await?;
    let headers = bearer(&session.refresh_token);

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Pro])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::ProRequired(user_id))) => assert_eq!(user_id, user.id),
        other => panic!("Expected ProRequired error, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests that Pro users pass the Pro permission.
///
/// Expected: Ok(User) on the pro plan
#[tokio::test]
async fn grants_pro_permission_to_pro_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::create_user_with_plan(db, "pro").await?;
    let session = factory::create_session(db, user.id).await?;
    let headers = bearer(&session.refresh_token);

    let resolved = AuthGuard::new(db, &headers)
        .require(&[Permission::Pro])
        .await?;

    assert_eq!(resolved.id, user.id);

    Ok(())
}
