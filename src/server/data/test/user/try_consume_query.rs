use super::*;

/// Tests consuming a query below the limit.
///
/// Expected: Ok(true) and counter incremented
#[tokio::test]
async fn consumes_query_under_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .queries_used(49)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let consumed = repo.try_consume_query(user.id, 50).await?;

    assert!(consumed);
    let user = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(user.queries_used, 50);

    Ok(())
}

/// Tests consuming a query when the limit is already reached.
///
/// Verifies that the conditional update leaves the counter untouched.
///
/// Expected: Ok(false) and counter unchanged
#[tokio::test]
async fn refuses_query_at_limit() -> Result<(), DbErr> {
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
    let consumed = repo.try_consume_query(user.id, 50).await?;

    assert!(!consumed);
    let user = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(user.queries_used, 50);

    Ok(())
}

/// Tests that repeated consumption stops exactly at the limit.
///
/// Expected: three successes then a refusal with limit 3
#[tokio::test]
async fn stops_exactly_at_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let mut results = Vec::new();
    for _ in 0..4 {
        results.push(repo.try_consume_query(user.id, 3).await?);
    }

    assert_eq!(results, vec![true, true, true, false]);

    Ok(())
}

/// Tests the untracked increment and reset used by the dashboard.
///
/// Expected: counter goes 0 -> 2 -> 0
#[tokio::test]
async fn increments_and_resets_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.increment_queries(user.id).await?;
    repo.increment_queries(user.id).await?;
    assert_eq!(repo.find_by_id(user.id).await?.unwrap().queries_used, 2);

    repo.reset_queries(user.id).await?;
    assert_eq!(repo.find_by_id(user.id).await?.unwrap().queries_used, 0);

    Ok(())
}
