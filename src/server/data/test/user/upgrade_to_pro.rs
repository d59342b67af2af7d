use super::*;

/// Tests upgrading a free user after payment.
///
/// Expected: Ok(true) with plan pro and usage reset
#[tokio::test]
async fn upgrades_and_resets_usage() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .queries_used(50)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let upgraded = repo.upgrade_to_pro(user.id).await?;

    assert!(upgraded);
    let user = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(user.plan, Plan::Pro);
    assert_eq!(user.queries_used, 0);

    Ok(())
}

/// Tests upgrading a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let upgraded = UserRepository::new(db).upgrade_to_pro(999).await?;

    assert!(!upgraded);

    Ok(())
}
