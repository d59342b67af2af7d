use super::*;

/// Tests accepting a code that was issued and has not expired.
///
/// Expected: Ok(true)
#[tokio::test]
async fn accepts_unexpired_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmailOtpRepository::new(db);
    repo.create("otp@example.com", "482913", Utc::now() + Duration::minutes(10))
        .await?;

    assert!(repo.is_valid("otp@example.com", "482913", Utc::now()).await?);

    Ok(())
}

/// Tests that codes stop working after ten minutes.
///
/// Expected: Ok(false) once the expiry has passed
#[tokio::test]
async fn rejects_expired_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::email_otp::EmailOtpFactory::new(db, "late@example.com")
        .code("111111")
        .expires_at(Utc::now() - Duration::minutes(1))
        .build()
        .await?;

    let repo = EmailOtpRepository::new(db);
    assert!(!repo.is_valid("late@example.com", "111111", Utc::now()).await?);

    Ok(())
}

/// Tests that a code issued to one email cannot be used by another.
///
/// Expected: Ok(false) for the wrong email or wrong code
#[tokio::test]
async fn rejects_mismatched_email_or_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_otp(db, "owner@example.com", "222222").await?;

    let repo = EmailOtpRepository::new(db);
    assert!(!repo.is_valid("other@example.com", "222222", Utc::now()).await?);
    assert!(!repo.is_valid("owner@example.com", "333333", Utc::now()).await?);

    Ok(())
}

/// Tests consuming and purging codes.
///
/// Expected: delete_by_email removes every code for the address, delete_expired only stale ones
#[tokio::test]
async fn deletes_consumed_and_expired_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_otp(db, "a@example.com", "100000").await?;
    factory::create_otp(db, "a@example.com", "100001").await?;
    factory::create_otp(db, "b@example.com", "100002").await?;
    factory::email_otp::EmailOtpFactory::new(db, "c@example.com")
        .expires_at(Utc::now() - Duration::minutes(5))
        .build()
        .await?;

    let repo = EmailOtpRepository::new(db);
    assert_eq!(repo.delete_by_email("a@example.com").await?, 2);
    assert_eq!(repo.delete_expired(Utc::now()).await?, 1);
    assert!(repo.is_valid("b@example.com", "100002", Utc::now()).await?);

    Ok(())
}
