use super::*;

/// Tests verifying an account after a correct OTP.
///
/// Expected: Ok with is_verified set and last_login_at stamped
#[tokio::test]
async fn marks_user_verified_and_stamps_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .verified(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo.mark_verified(user.id).await?;

    assert!(updated.is_verified);
    assert!(updated.last_login_at.is_some());

    Ok(())
}

/// Tests verifying a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).mark_verified(404).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
